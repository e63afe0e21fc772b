//! Command implementations
//!
//! Each command contains the business logic for a specific CLI operation.

pub mod build;
pub mod check;
pub mod generate;
pub mod lookup;

pub use build::build_index;
pub use check::{CheckResult, check_words};
pub use generate::{GenerateResult, run_generate};
pub use lookup::{LookupResult, lookup_prefix};
