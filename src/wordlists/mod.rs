//! Word lists for board solving
//!
//! Source files are merged into one sorted wordlist file, which is then
//! streamed into the tries.

pub mod loader;

use crate::error::Result;
use std::path::{Path, PathBuf};

pub use loader::{WordStream, generate, load, words_from_directory, words_from_file};

/// A source directory paired with the wordlist generated from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    source: PathBuf,
    destination: PathBuf,
}

impl WordList {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Regenerate the wordlist file unconditionally
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the sources cannot be read or the wordlist
    /// cannot be written.
    pub fn generate(&self) -> Result<usize> {
        generate(&self.source, &self.destination)
    }

    /// Stream the words, generating the wordlist first if it is missing
    ///
    /// # Errors
    ///
    /// See [`load`].
    pub fn words(&self) -> Result<WordStream> {
        load(&self.source, &self.destination)
    }
}
