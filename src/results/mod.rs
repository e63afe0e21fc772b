//! Search results
//!
//! Board searches emit [`ResultWord`]s; a [`ResultList`] collects them for
//! one session, removes duplicates and ranks them.

mod list;
mod word;

use std::time::Instant;

pub use list::{ResultList, TOP_RESULTS};
pub use word::ResultWord;

/// Source of elapsed time for reports
pub trait Timer {
    fn elapsed_millis(&self) -> u128;
}

impl Timer for Instant {
    fn elapsed_millis(&self) -> u128 {
        self.elapsed().as_millis()
    }
}
