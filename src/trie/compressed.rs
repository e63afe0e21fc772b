//! Compressed (radix) trie
//!
//! Edges carry one or more letters. Insertion only ever follows an existing
//! label that is a prefix of the remaining spelling, and otherwise opens a
//! one-letter edge; labels are never split afterwards. Multi-letter labels
//! come from [`CompressedTrie::compact`], which collapses word-less chains.
//! As a result the shape of the tree depends on insertion order.

use std::mem;

use super::TrieQuery;
use super::arena::{Arena, NodeId};

/// Radix trie over words
#[derive(Debug, Clone, Default)]
pub struct CompressedTrie {
    arena: Arena,
}

impl CompressedTrie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from `words` and collapse it
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie.compact();
        trie
    }

    /// Add a word under its own spelling
    pub fn insert(&mut self, word: &str) {
        self.insert_spelling(word, word);
    }

    /// Add `word` so that it is reached by walking `spelling`
    ///
    /// Inserting the same pair twice stores the word twice.
    pub fn insert_spelling(&mut self, spelling: &str, word: &str) {
        let mut node = NodeId::ROOT;
        let mut rest = spelling;

        while let Some(first) = rest.chars().next() {
            let existing = self
                .arena
                .node(node)
                .edges
                .iter()
                .find(|e| rest.starts_with(&*e.label))
                .map(|e| (e.child, e.label.len()));

            let consumed = match existing {
                Some((child, len)) => {
                    node = child;
                    len
                }
                None => {
                    let len = first.len_utf8();
                    node = self.arena.add_child(node, rest[..len].into());
                    len
                }
            };
            rest = &rest[consumed..];
        }

        self.arena.node_mut(node).words.push(word.to_string());
    }

    /// Collapse every chain of word-less, single-child nodes into one edge
    pub fn compact(&mut self) {
        let mut old = mem::take(&mut self.arena);
        let mut compact = Arena::default();
        compact.node_mut(NodeId::ROOT).words = mem::take(&mut old.node_mut(NodeId::ROOT).words);

        let mut pending = vec![(NodeId::ROOT, NodeId::ROOT)];
        while let Some((src, dst)) = pending.pop() {
            for edge in mem::take(&mut old.node_mut(src).edges) {
                let mut label = String::from(edge.label);
                let mut child = edge.child;

                loop {
                    let node = old.node(child);
                    if !node.words.is_empty() || node.edges.len() != 1 {
                        break;
                    }
                    let next = &node.edges[0];
                    label.push_str(&next.label);
                    child = next.child;
                }

                let new_child = compact.add_child(dst, label.into_boxed_str());
                compact.node_mut(new_child).words = mem::take(&mut old.node_mut(child).words);
                pending.push((child, new_child));
            }
        }

        self.arena = compact;
    }

    /// Combine two tries, keeping every word of both
    ///
    /// Both sides are unfolded to one letter per edge, joined, and collapsed
    /// again, so labels sharing a first letter end up under a single edge.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let mut unfolded = Arena::default();
        self.unfold_into(&mut unfolded);
        other.unfold_into(&mut unfolded);

        let mut merged = Self { arena: unfolded };
        merged.compact();
        merged
    }

    /// Move every word into `target` under its full spelling, one letter per edge
    fn unfold_into(mut self, target: &mut Arena) {
        let mut pending = vec![(NodeId::ROOT, String::new())];

        while let Some((id, spelling)) = pending.pop() {
            let node = self.arena.node_mut(id);
            if !node.words.is_empty() {
                let dst = target.insert_path(&spelling);
                target.node_mut(dst).words.append(&mut node.words);
            }
            // Reversed so children are unfolded in insertion order
            for edge in node.edges.iter().rev() {
                pending.push((edge.child, format!("{spelling}{}", edge.label)));
            }
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.arena.word_count()
    }

    /// Labels of the outgoing edges of `node`, in insertion order
    pub fn labels(&self, node: NodeId) -> impl Iterator<Item = &str> {
        self.arena.node(node).edges.iter().map(|e| &*e.label)
    }
}

impl TrieQuery for CompressedTrie {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn advance(&self, node: NodeId, letter: char) -> Option<(NodeId, &str)> {
        self.arena
            .node(node)
            .edges
            .iter()
            .find(|e| e.label.starts_with(letter))
            .map(|e| (e.child, &*e.label))
    }

    fn leaves(&self, node: NodeId, recursive: bool) -> Vec<&str> {
        self.arena.words(node, recursive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<&str>) -> Vec<&str> {
        words.sort_unstable();
        words
    }

    #[test]
    fn insert_and_leaves() {
        let mut trie = CompressedTrie::new();
        for word in ["cat", "car", "cart"] {
            trie.insert(word);
        }

        assert_eq!(
            sorted(trie.leaves(trie.root(), true)),
            vec!["car", "cart", "cat"]
        );

        let node = trie.find("car").unwrap();
        assert!(node.is_aligned());
        assert_eq!(node.words(), vec!["car"]);
        assert_eq!(sorted(node.all_words()), vec!["car", "cart"]);
    }

    #[test]
    fn compact_collapses_chains() {
        let trie = CompressedTrie::from_words(["cat", "car", "cart"]);

        let labels: Vec<&str> = trie.labels(trie.root()).collect();
        assert_eq!(labels, vec!["ca"]);

        let (node, label) = trie.advance(trie.root(), 'c').unwrap();
        assert_eq!(label, "ca");
        let mut below: Vec<&str> = trie.labels(node).collect();
        below.sort_unstable();
        assert_eq!(below, vec!["r", "t"]);

        // c, a, r: the cursor consumes "ca" over two steps
        let cursor = trie.find("car").unwrap();
        assert_eq!(cursor.words(), vec!["car"]);
        assert!(!cursor.words().contains(&"cart"));
        assert_eq!(trie.word_count(), 3);
    }

    #[test]
    fn cursor_mid_label_has_no_words() {
        let trie = CompressedTrie::from_words(["banana"]);
        let (_, label) = trie.advance(trie.root(), 'b').unwrap();
        assert_eq!(label, "banana");

        let cursor = trie.find("ban").unwrap();
        assert!(!cursor.is_aligned());
        assert_eq!(cursor.pending(), "ana");
        assert!(cursor.words().is_empty());
        assert_eq!(cursor.all_words(), vec!["banana"]);
        assert!(cursor.step('x').is_none());
    }

    #[test]
    fn labels_are_never_split() {
        let mut trie = CompressedTrie::from_words(["tree"]);
        trie.insert("try");

        // "tree" is not a prefix of "try", so a sibling "t" edge is opened
        let labels: Vec<&str> = trie.labels(trie.root()).collect();
        assert_eq!(labels, vec!["tree", "t"]);

        // Advance takes the first matching edge, the older "tree" label
        let (_, label) = trie.advance(trie.root(), 't').unwrap();
        assert_eq!(label, "tree");
        assert_eq!(sorted(trie.leaves(trie.root(), true)), vec!["tree", "try"]);
    }

    #[test]
    fn later_words_follow_existing_labels() {
        let mut trie = CompressedTrie::from_words(["do"]);
        trie.insert("dog");
        trie.insert("doge");

        let labels: Vec<&str> = trie.labels(trie.root()).collect();
        assert_eq!(labels, vec!["do"]);
        assert_eq!(trie.find("dog").unwrap().words(), vec!["dog"]);
        assert_eq!(trie.find("doge").unwrap().words(), vec!["doge"]);
    }

    #[test]
    fn unknown_prefix_stops_early() {
        let trie = CompressedTrie::from_words(["cat", "car"]);
        assert!(trie.advance(trie.root(), 'z').is_none());
        assert!(trie.find("cu").is_none());
    }

    #[test]
    fn duplicate_insert_keeps_both() {
        let mut trie = CompressedTrie::new();
        trie.insert("echo");
        trie.insert("echo");
        assert_eq!(trie.find("echo").unwrap().words(), vec!["echo", "echo"]);
    }

    #[test]
    fn merge_unifies_labels_with_shared_first_letter() {
        let left = CompressedTrie::from_words(["banana"]);
        let right = CompressedTrie::from_words(["band", "bandana"]);
        assert_eq!(left.labels(left.root()).collect::<Vec<_>>(), vec!["banana"]);
        assert_eq!(right.labels(right.root()).collect::<Vec<_>>(), vec!["band"]);

        let merged = left.merge(right);
        assert_eq!(merged.labels(merged.root()).collect::<Vec<_>>(), vec!["ban"]);
        for word in ["banana", "band", "bandana"] {
            assert_eq!(merged.find(word).unwrap().words(), vec![word]);
        }
    }

    #[test]
    fn merge_repairs_insertion_order_siblings() {
        let mut left = CompressedTrie::from_words(["tree"]);
        left.insert("try");
        let merged = left.merge(CompressedTrie::new());

        assert_eq!(merged.find("try").unwrap().words(), vec!["try"]);
        assert_eq!(merged.find("tree").unwrap().words(), vec!["tree"]);
    }

    #[test]
    fn merge_keeps_duplicates() {
        let merged =
            CompressedTrie::from_words(["toad"]).merge(CompressedTrie::from_words(["toad"]));
        assert_eq!(merged.find("toad").unwrap().words(), vec!["toad", "toad"]);
    }

    #[test]
    fn merge_preserves_all_words() {
        let left = CompressedTrie::from_words(["cat", "cart"]);
        let right = CompressedTrie::from_words(["dog", "car"]);

        let merged = left.merge(right);
        assert_eq!(
            sorted(merged.leaves(merged.root(), true)),
            vec!["car", "cart", "cat", "dog"]
        );
        for word in ["cat", "cart", "dog", "car"] {
            let cursor = merged.find(word).unwrap_or_else(|| panic!("{word} unreachable"));
            assert_eq!(cursor.words(), vec![word]);
        }

        // "car" from the right side is folded under the shared "ca" edge
        let labels: Vec<&str> = merged.labels(merged.root()).collect();
        assert_eq!(labels, vec!["ca", "dog"]);
        let (node, _) = merged.advance(merged.root(), 'c').unwrap();
        let below: Vec<&str> = merged.labels(node).collect();
        assert_eq!(below, vec!["t", "r"]);
    }
}
