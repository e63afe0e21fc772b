//! Word index: one trie per swap budget

use std::collections::BTreeMap;

use crate::config::IndexConfig;
use crate::error::Result;
use crate::trie::{SwapExpansion, Trie, TrieKind, TrieQuery, WildcardSwaps};

/// Tries of a single encoding, keyed by swap budget
#[derive(Debug, Clone)]
pub struct WordIndex {
    kind: TrieKind,
    tries: BTreeMap<usize, Trie>,
}

impl WordIndex {
    #[must_use]
    pub const fn new(kind: TrieKind) -> Self {
        Self {
            kind,
            tries: BTreeMap::new(),
        }
    }

    /// Build every trie the configuration asks for
    ///
    /// The wordlist is generated on first use and streamed once per trie.
    ///
    /// # Errors
    ///
    /// Returns an error if the wordlist cannot be produced or read. Swap
    /// budgets the encoding cannot serve are skipped, see
    /// [`IndexConfig::budgets`].
    pub fn build(config: &IndexConfig) -> Result<Self> {
        let list = config.word_list();
        let mut index = Self::new(config.kind);
        for swaps in config.budgets() {
            index.insert_trie(swaps, list.words()?, &WildcardSwaps)?;
        }
        Ok(index)
    }

    /// Build the trie for `swaps` from `words`, replacing any existing one
    ///
    /// # Errors
    ///
    /// See [`Trie::build`].
    pub fn insert_trie<I, E>(&mut self, swaps: usize, words: I, expansion: &E) -> Result<()>
    where
        I: IntoIterator<Item = Result<String>>,
        E: SwapExpansion + ?Sized,
    {
        let trie = Trie::build(self.kind, swaps, words, expansion)?;
        self.tries.insert(swaps, trie);
        Ok(())
    }

    #[must_use]
    pub const fn kind(&self) -> TrieKind {
        self.kind
    }

    /// Trie serving exactly `swaps` substitutions
    #[must_use]
    pub fn trie(&self, swaps: usize) -> Option<&Trie> {
        self.tries.get(&swaps)
    }

    /// All tries in ascending swap order
    pub fn tries(&self) -> impl Iterator<Item = (usize, &Trie)> {
        self.tries.iter().map(|(&swaps, trie)| (swaps, trie))
    }

    /// Words starting with `prefix`, per swap budget
    ///
    /// Budgets whose trie has no such prefix report an empty list.
    #[must_use]
    pub fn lookup(&self, prefix: &str) -> Vec<(usize, Vec<&str>)> {
        self.tries()
            .map(|(swaps, trie)| {
                let words = trie
                    .find(prefix)
                    .map(|cursor| cursor.all_words())
                    .unwrap_or_default();
                (swaps, words)
            })
            .collect()
    }

    /// Merge every trie into one answering for all budgets
    ///
    /// # Errors
    ///
    /// Fails only if the tries disagree on encoding.
    pub fn into_combined(self) -> Result<Option<Trie>> {
        let mut tries = self.tries.into_values();
        let Some(first) = tries.next() else {
            return Ok(None);
        };
        tries.try_fold(first, Trie::merge).map(Some)
    }
}
