//! Dictionary word representation
//!
//! A Word is a non-empty lowercase string over the 26-letter alphabet.

use std::fmt;

/// Letters a word may be spelled with
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A validated, lowercase dictionary word
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter(c) => write!(f, "Word contains invalid character {c:?}"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a Word from a raw line of text
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased before
    /// validation.
    ///
    /// # Errors
    /// Returns `WordError` if the normalized text is empty or contains a
    /// character outside [`ALPHABET`].
    ///
    /// # Examples
    /// ```
    /// use spellsolver::core::Word;
    ///
    /// let word = Word::new("  Apple\n").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("ap ple").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = normalize(text);

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !is_alphabet_letter(*c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the word, returning its text
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Total point value of the word's letters
    #[must_use]
    pub fn points(&self) -> u32 {
        word_points(&self.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Trim and lowercase a raw line
#[must_use]
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

#[inline]
fn is_alphabet_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Check whether every character of `word` belongs to [`ALPHABET`]
///
/// The empty string passes this check; [`Word::new`] rejects it separately.
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    word.chars().all(is_alphabet_letter)
}

/// Point value of a single letter, 0 for anything outside the alphabet
#[must_use]
pub const fn letter_points(letter: char) -> u32 {
    match letter {
        'a' | 'e' | 'i' | 'o' => 1,
        'n' | 'r' | 's' | 't' => 2,
        'd' | 'g' | 'l' => 3,
        'b' | 'h' | 'm' | 'p' | 'u' | 'y' => 4,
        'c' | 'f' | 'v' | 'w' => 5,
        'k' => 6,
        'j' | 'x' => 7,
        'q' | 'z' => 8,
        _ => 0,
    }
}

/// Sum of the letter points of `word`
#[must_use]
pub fn word_points(word: &str) -> u32 {
    word.chars().map(letter_points).sum()
}
