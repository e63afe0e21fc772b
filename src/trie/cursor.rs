//! Tile-by-tile walking over any trie
//!
//! `advance` consumes one letter but may return a longer label. A cursor
//! remembers the unconsumed remainder of that label, so the next tile is
//! first checked against the remainder and only then against the node's
//! outgoing edges. Words are reported only once a label is fully consumed.

use super::TrieQuery;

/// Position of a board walk inside a trie
pub struct TrieCursor<'a, Q: TrieQuery + ?Sized> {
    trie: &'a Q,
    node: Q::Node,
    pending: &'a str,
}

impl<Q: TrieQuery + ?Sized> Clone for TrieCursor<'_, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: TrieQuery + ?Sized> Copy for TrieCursor<'_, Q> {}

impl<'a, Q: TrieQuery + ?Sized> TrieCursor<'a, Q> {
    /// Cursor at the root of `trie`
    pub fn new(trie: &'a Q) -> Self {
        Self {
            trie,
            node: trie.root(),
            pending: "",
        }
    }

    /// Consume one letter, or `None` if no word continues with it
    #[must_use]
    pub fn step(&self, letter: char) -> Option<Self> {
        if let Some(rest) = self.pending.strip_prefix(letter) {
            return Some(Self {
                pending: rest,
                ..*self
            });
        }
        if !self.pending.is_empty() {
            return None;
        }

        let (node, label) = self.trie.advance(self.node, letter)?;
        Some(Self {
            trie: self.trie,
            node,
            pending: &label[letter.len_utf8()..],
        })
    }

    /// Consume every letter of `text`
    #[must_use]
    pub fn walk(&self, text: &str) -> Option<Self> {
        text.chars().try_fold(*self, |cursor, letter| cursor.step(letter))
    }

    /// Node at the end of the last matched edge
    pub fn node(&self) -> Q::Node {
        self.node
    }

    /// Letters of the current label still to be consumed
    #[must_use]
    pub fn pending(&self) -> &'a str {
        self.pending
    }

    /// True when the walk sits exactly on a node
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.pending.is_empty()
    }

    /// Words spelled exactly by the letters consumed so far
    #[must_use]
    pub fn words(&self) -> Vec<&'a str> {
        if self.is_aligned() {
            self.trie.leaves(self.node, false)
        } else {
            Vec::new()
        }
    }

    /// Every word that starts with the letters consumed so far
    #[must_use]
    pub fn all_words(&self) -> Vec<&'a str> {
        self.trie.leaves(self.node, true)
    }
}
