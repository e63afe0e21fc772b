//! Error types shared across the crate

use std::io;
use std::path::PathBuf;

use crate::trie::TrieKind;

/// Errors raised while building or combining word indexes
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    /// A source file, source directory or wordlist could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two tries with different encodings cannot be merged
    #[error("cannot merge a {left} trie with a {right} trie")]
    KindMismatch { left: TrieKind, right: TrieKind },

    /// Compressed tries only index plain spellings
    #[error("{kind} tries do not support {swaps} swaps")]
    UnsupportedSwaps { kind: TrieKind, swaps: usize },

    /// The external fst dictionary rejected its input
    #[error("dictionary error: {0}")]
    Dictionary(#[from] fst::Error),
}

impl SpellError {
    /// Attach the offending path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SpellError>;
