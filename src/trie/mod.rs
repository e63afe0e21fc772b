//! Word tries for board walking
//!
//! Two encodings share one query contract, [`TrieQuery`]. Board searches are
//! written against the trait and drive it one tile at a time, usually through
//! a [`TrieCursor`].

mod arena;
mod compressed;
mod cursor;
mod flat;
mod swaps;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SpellError};

pub use arena::NodeId;
pub use compressed::CompressedTrie;
pub use cursor::TrieCursor;
pub use flat::FlatTrie;
pub use swaps::{SwapExpansion, WILDCARD, WildcardSwaps};

/// Read-only traversal of a trie
///
/// Queries never mutate; any number of walks may share a `&` borrow of the
/// same trie.
pub trait TrieQuery {
    /// Handle to a node, valid for the trie that produced it
    type Node: Copy;

    /// Entry point of every walk
    fn root(&self) -> Self::Node;

    /// Follow the edge from `node` whose label starts with `letter`
    ///
    /// Returns the child together with the full label matched, which may be
    /// longer than one letter. `None` means no word continues this way.
    fn advance(&self, node: Self::Node, letter: char) -> Option<(Self::Node, &str)>;

    /// Words terminating at `node`, plus its whole subtree when `recursive`
    fn leaves(&self, node: Self::Node, recursive: bool) -> Vec<&str>;

    /// Cursor positioned at the root
    fn cursor(&self) -> TrieCursor<'_, Self> {
        TrieCursor::new(self)
    }

    /// Cursor after walking all of `prefix`, if any word starts with it
    fn find(&self, prefix: &str) -> Option<TrieCursor<'_, Self>> {
        self.cursor().walk(prefix)
    }
}

/// Encoding used for a trie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum TrieKind {
    /// Radix trie, edges may span several letters
    #[value(alias = "patricia", alias = "radix")]
    Compressed,
    /// One letter per edge, supports swaps
    #[default]
    #[value(alias = "prefix")]
    Flat,
}

impl TrieKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compressed => "compressed",
            Self::Flat => "flat",
        }
    }

    /// Whether tries of this kind can index `swaps` substitutions
    #[must_use]
    pub const fn supports_swaps(self, swaps: usize) -> bool {
        match self {
            Self::Compressed => swaps == 0,
            Self::Flat => true,
        }
    }
}

impl fmt::Display for TrieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for unrecognized trie kind names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trie kind {0:?}, expected \"flat\" or \"compressed\"")]
pub struct ParseTrieKindError(String);

impl FromStr for TrieKind {
    type Err = ParseTrieKindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compressed" | "patricia" | "radix" => Ok(Self::Compressed),
            "flat" | "prefix" => Ok(Self::Flat),
            _ => Err(ParseTrieKindError(s.to_string())),
        }
    }
}

/// A trie of either encoding
///
/// Static dispatch over the two encodings; the variant is chosen once by
/// [`Trie::new`] and never changes.
#[derive(Debug, Clone)]
pub enum Trie {
    Compressed(CompressedTrie),
    Flat(FlatTrie),
}

impl Trie {
    /// Create an empty trie of `kind` for a swap budget
    ///
    /// # Errors
    ///
    /// Compressed tries only index plain spellings and reject a non-zero
    /// swap budget.
    pub fn new(kind: TrieKind, swaps: usize) -> Result<Self> {
        match kind {
            _ if !kind.supports_swaps(swaps) => Err(SpellError::UnsupportedSwaps { kind, swaps }),
            TrieKind::Compressed => Ok(Self::Compressed(CompressedTrie::new())),
            TrieKind::Flat => Ok(Self::Flat(FlatTrie::new(swaps))),
        }
    }

    /// Build a complete trie from a stream of words
    ///
    /// Flat tries index every spelling `expansion` yields for the budget;
    /// compressed tries are collapsed once all words are in.
    ///
    /// # Errors
    ///
    /// Fails on an unsupported swap budget or on the first error item of
    /// `words`.
    pub fn build<I, E>(kind: TrieKind, swaps: usize, words: I, expansion: &E) -> Result<Self>
    where
        I: IntoIterator<Item = Result<String>>,
        E: SwapExpansion + ?Sized,
    {
        let mut trie = Self::new(kind, swaps)?;
        for word in words {
            trie.insert_word(&word?, expansion);
        }
        if let Self::Compressed(inner) = &mut trie {
            inner.compact();
        }

        log::debug!(
            "Built {kind} trie for {swaps} swaps: {} nodes, {} entries",
            trie.node_count(),
            trie.word_count()
        );
        Ok(trie)
    }

    #[must_use]
    pub const fn kind(&self) -> TrieKind {
        match self {
            Self::Compressed(_) => TrieKind::Compressed,
            Self::Flat(_) => TrieKind::Flat,
        }
    }

    /// Swap budget served by this trie
    #[must_use]
    pub const fn swaps(&self) -> usize {
        match self {
            Self::Compressed(_) => 0,
            Self::Flat(t) => t.swaps(),
        }
    }

    /// Add a word under its own spelling
    pub fn insert(&mut self, word: &str) {
        match self {
            Self::Compressed(t) => t.insert(word),
            Self::Flat(t) => t.insert(word),
        }
    }

    /// Add a word the way this trie indexes words
    pub fn insert_word<E: SwapExpansion + ?Sized>(&mut self, word: &str, expansion: &E) {
        match self {
            Self::Compressed(t) => t.insert(word),
            Self::Flat(t) => t.insert_swapped(word, expansion),
        }
    }

    /// Combine with another trie of the same kind
    ///
    /// # Errors
    ///
    /// Returns `KindMismatch` if the encodings differ.
    pub fn merge(self, other: Self) -> Result<Self> {
        match (self, other) {
            (Self::Compressed(a), Self::Compressed(b)) => Ok(Self::Compressed(a.merge(b))),
            (Self::Flat(a), Self::Flat(b)) => Ok(Self::Flat(a.merge(b))),
            (a, b) => Err(SpellError::KindMismatch {
                left: a.kind(),
                right: b.kind(),
            }),
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Compressed(t) => t.node_count(),
            Self::Flat(t) => t.node_count(),
        }
    }

    /// Number of stored word entries, counting every indexed spelling
    #[must_use]
    pub fn word_count(&self) -> usize {
        match self {
            Self::Compressed(t) => t.word_count(),
            Self::Flat(t) => t.word_count(),
        }
    }
}

impl TrieQuery for Trie {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn advance(&self, node: NodeId, letter: char) -> Option<(NodeId, &str)> {
        match self {
            Self::Compressed(t) => t.advance(node, letter),
            Self::Flat(t) => t.advance(node, letter),
        }
    }

    fn leaves(&self, node: NodeId, recursive: bool) -> Vec<&str> {
        match self {
            Self::Compressed(t) => t.leaves(node, recursive),
            Self::Flat(t) => t.leaves(node, recursive),
        }
    }
}
