//! Core domain types
//!
//! Words, letter scoring and board coordinates. Nothing here touches the
//! filesystem or the tries.

mod coordinates;
mod word;

pub use coordinates::{BOARD_SIDE, Coordinates};
pub use word::{ALPHABET, Word, WordError, is_valid_word, letter_points, normalize, word_points};
