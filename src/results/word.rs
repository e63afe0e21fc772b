//! A single word found on the board

use serde::Serialize;

use crate::core::Coordinates;

/// A word discovered by a board search
///
/// `path` holds one board position per letter; `swaps` lists the letter
/// indices where the board tile was substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultWord {
    pub score: i32,
    pub word: String,
    pub path: Vec<Coordinates>,
    pub swaps: Vec<usize>,
}

impl ResultWord {
    #[must_use]
    pub fn new(score: i32, word: impl Into<String>, path: Vec<Coordinates>) -> Self {
        Self {
            score,
            word: word.into(),
            path,
            swaps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_swaps(mut self, swaps: Vec<usize>) -> Self {
        self.swaps = swaps;
        self
    }

    /// Short form, `score word`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} {}", self.score, self.word)
    }

    /// Trace form
    ///
    /// Starts with the score, the word and the position of its first letter,
    /// then gives the letter and position of every swapped tile, all
    /// separated by `|` and wrapped in parentheses.
    #[must_use]
    pub fn trace(&self) -> String {
        let mut parts = Vec::with_capacity(self.swaps.len() + 1);

        parts.push(match self.path.first() {
            Some(first) => format!("{} {} {first}", self.score, self.word),
            None => self.summary(),
        });

        for &index in &self.swaps {
            let letter = self.word.chars().nth(index).unwrap_or('?');
            match self.path.get(index) {
                Some(cord) => parts.push(format!("{letter} {cord}")),
                None => parts.push(letter.to_string()),
            }
        }

        format!("({})", parts.join(" | "))
    }
}
