//! Flat trie with one letter per edge
//!
//! Each instance serves a single swap budget. Words are indexed under every
//! spelling the swap expansion produces for that budget, so a walk over a
//! swapped spelling still ends at the original word.

use super::TrieQuery;
use super::arena::{Arena, NodeId};
use super::swaps::SwapExpansion;

/// Single-character trie for one swap budget
#[derive(Debug, Clone, Default)]
pub struct FlatTrie {
    arena: Arena,
    swaps: usize,
}

impl FlatTrie {
    /// Create an empty trie for `swaps` substitutions
    #[must_use]
    pub fn new(swaps: usize) -> Self {
        Self {
            arena: Arena::default(),
            swaps,
        }
    }

    /// Swap budget this trie was built for
    ///
    /// After a merge this is the larger budget of the two parts.
    #[must_use]
    pub const fn swaps(&self) -> usize {
        self.swaps
    }

    /// Add a word under its own spelling
    pub fn insert(&mut self, word: &str) {
        self.insert_spelling(word, word);
    }

    /// Add `word` under every spelling `expansion` yields for this budget
    pub fn insert_swapped<E: SwapExpansion + ?Sized>(&mut self, word: &str, expansion: &E) {
        for spelling in expansion.expand(word, self.swaps) {
            self.insert_spelling(&spelling, word);
        }
    }

    /// Add `word` so that it is reached by walking `spelling`
    pub fn insert_spelling(&mut self, spelling: &str, word: &str) {
        let node = self.arena.insert_path(spelling);
        self.arena.node_mut(node).words.push(word.to_string());
    }

    /// Combine two tries, keeping every word of both
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.swaps = self.swaps.max(other.swaps);
        self.arena.merge(other.arena);
        self
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.arena.word_count()
    }
}

impl TrieQuery for FlatTrie {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn advance(&self, node: NodeId, letter: char) -> Option<(NodeId, &str)> {
        let mut buf = [0u8; 4];
        let wanted: &str = letter.encode_utf8(&mut buf);
        self.arena
            .node(node)
            .edges
            .iter()
            .find(|e| &*e.label == wanted)
            .map(|e| (e.child, &*e.label))
    }

    fn leaves(&self, node: NodeId, recursive: bool) -> Vec<&str> {
        self.arena.words(node, recursive)
    }
}
