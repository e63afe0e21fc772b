//! Index configuration
//!
//! Chosen once at startup and handed to [`WordIndex::build`](crate::index::WordIndex::build).

use std::path::PathBuf;

use crate::trie::TrieKind;
use crate::wordlists::WordList;

/// Directory holding the raw source word files
pub const DEFAULT_SOURCES: &str = "resources/sources";
/// Generated wordlist location
pub const DEFAULT_WORDLIST: &str = "resources/wordlist.txt";
/// Swap budgets indexed by default
pub const DEFAULT_SWAPS: [usize; 3] = [0, 1, 2];

/// Where words come from and how they are indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    pub sources: PathBuf,
    pub wordlist: PathBuf,
    pub kind: TrieKind,
    /// One trie is built per entry
    pub swaps: Vec<usize>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            sources: PathBuf::from(DEFAULT_SOURCES),
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            kind: TrieKind::default(),
            swaps: DEFAULT_SWAPS.to_vec(),
        }
    }
}

impl IndexConfig {
    #[must_use]
    pub fn word_list(&self) -> WordList {
        WordList::new(&self.sources, &self.wordlist)
    }

    /// Swap budgets the configured encoding can index
    ///
    /// Budgets the encoding cannot serve are dropped with a warning, so the
    /// default budgets work with every kind.
    #[must_use]
    pub fn budgets(&self) -> Vec<usize> {
        let mut budgets = Vec::with_capacity(self.swaps.len());
        for &swaps in &self.swaps {
            if self.kind.supports_swaps(swaps) {
                if !budgets.contains(&swaps) {
                    budgets.push(swaps);
                }
            } else {
                log::warn!("{} tries do not support swaps, skipping budget {swaps}", self.kind);
            }
        }
        budgets
    }
}
