//! Depth-first traversals.
//!
//! Children are visited in slot order and siblings never share a first base,
//! so pre-order over the tree is lexicographic order over the stored
//! sequences. No sort step is involved; each iterator can be restarted by
//! asking the tree for a new one.

use std::iter::FusedIterator;

use crate::node::Node;
use crate::Sequence;

/// A snapshot of one node seen during a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo<'a> {
    /// 1 for children of the root.
    pub depth: usize,
    /// Concatenated prefixes from the root down to and including this node.
    pub path: String,
    /// This node's own segment.
    pub prefix: &'a str,
    pub end_of_sequence: bool,
    pub occurrences: usize,
    pub children: usize,
}

/// Pre-order iterator over every node below the root.
pub struct Nodes<'a> {
    /// (node, depth, length of the parent's path)
    stack: Vec<(&'a Node, usize, usize)>,
    path: String,
}

impl<'a> Nodes<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        let mut nodes = Self {
            stack: Vec::new(),
            path: String::new(),
        };
        nodes.push_children(root, 1, 0);
        nodes
    }

    fn push_children(&mut self, node: &'a Node, depth: usize, path_len: usize) {
        // Reversed so the lowest slot is popped first.
        for child in node.children.iter().rev().flatten() {
            self.stack.push((&**child, depth, path_len));
        }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = NodeInfo<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth, parent_len) = self.stack.pop()?;
        self.path.truncate(parent_len);
        self.path.push_str(&node.prefix);
        let path_len = self.path.len();
        self.push_children(node, depth + 1, path_len);

        Some(NodeInfo {
            depth,
            path: self.path.clone(),
            prefix: &node.prefix,
            end_of_sequence: node.end_of_sequence,
            occurrences: node.occurrences,
            children: node.child_count(),
        })
    }
}

impl FusedIterator for Nodes<'_> {}

/// Stored sequences with their occurrence counts.
pub struct Iter<'a> {
    nodes: Nodes<'a>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self {
            nodes: Nodes::new(root),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = (Sequence, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes
            .by_ref()
            .find(|info| info.end_of_sequence)
            .map(|info| (Sequence::from_validated(info.path), info.occurrences))
    }
}

impl FusedIterator for Iter<'_> {}

/// Stored sequences, each reported once regardless of its count.
pub struct Sequences<'a> {
    iter: Iter<'a>,
}

impl<'a> Sequences<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self {
            iter: Iter::new(root),
        }
    }
}

impl Iterator for Sequences<'_> {
    type Item = Sequence;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(sequence, _)| sequence)
    }
}

impl FusedIterator for Sequences<'_> {}
