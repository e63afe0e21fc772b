//! Arena storage shared by both trie encodings
//!
//! Nodes live in a `Vec` and refer to their children by index, so the tree
//! is strictly owned without recursive boxes. Edges keep insertion order.

use std::mem;

/// Index of a node inside its trie
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Every trie starts with its root at index 0
    pub const ROOT: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Edge {
    pub label: Box<str>,
    pub child: NodeId,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub edges: Vec<Edge>,
    /// Words whose spelling terminates here, in insertion order
    pub words: Vec<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }
}

impl Arena {
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Append a fresh child under `parent`, reached through `label`
    pub fn add_child(&mut self, parent: NodeId, label: Box<str>) -> NodeId {
        let child = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        self.nodes[parent.0].edges.push(Edge { label, child });
        child
    }

    /// Child reached through an edge labelled exactly `label`
    pub fn child(&self, parent: NodeId, label: &str) -> Option<NodeId> {
        self.node(parent)
            .edges
            .iter()
            .find(|e| &*e.label == label)
            .map(|e| e.child)
    }

    /// Walk `spelling` one letter per edge from the root, opening edges as needed
    pub fn insert_path(&mut self, spelling: &str) -> NodeId {
        let mut node = NodeId::ROOT;
        let mut buf = [0u8; 4];

        for letter in spelling.chars() {
            let label: &str = letter.encode_utf8(&mut buf);
            node = match self.child(node, label) {
                Some(child) => child,
                None => self.add_child(node, label.into()),
            };
        }
        node
    }

    /// Words at `id`, followed by the subtree in pre-order when `recursive`
    pub fn words(&self, id: NodeId, recursive: bool) -> Vec<&str> {
        if !recursive {
            return self.node(id).words.iter().map(String::as_str).collect();
        }

        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.node(current);
            out.extend(node.words.iter().map(String::as_str));
            stack.extend(node.edges.iter().rev().map(|e| e.child));
        }
        out
    }

    pub fn word_count(&self) -> usize {
        self.nodes.iter().map(|n| n.words.len()).sum()
    }

    /// Fold `other` into this arena
    ///
    /// Edges with identical labels are merged recursively, anything else is
    /// grafted as a new subtree. Word lists are concatenated, so nothing from
    /// either side is lost.
    pub fn merge(&mut self, mut other: Self) {
        let mut pending = vec![(NodeId::ROOT, NodeId::ROOT)];

        while let Some((dst, src)) = pending.pop() {
            let node = mem::take(&mut other.nodes[src.0]);
            self.nodes[dst.0].words.extend(node.words);

            for edge in node.edges {
                let target = match self.child(dst, &edge.label) {
                    Some(existing) => existing,
                    None => self.add_child(dst, edge.label),
                };
                pending.push((target, edge.child));
            }
        }
    }
}
