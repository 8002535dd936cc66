//! The radix tree engine.
//!
//! Every operation validates its input first and only then walks the tree,
//! so a rejected sequence never leaves a half-applied change behind.
//!
//! Mutations are written as recursions that take a child out of its slot,
//! transform it, and hand back whatever should occupy the slot afterwards
//! (the same node, a split node, or nothing). No call holds a reference into
//! the tree across a structural change.

mod debug;
mod insert;
mod iter;
mod remove;

pub use iter::{Iter, NodeInfo, Nodes, Sequences};

use crate::alphabet::{slot_of, validate};
use crate::node::Node;
use crate::InvalidSequence;

/// Aggregate counts over a whole tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Distinct stored sequences (end-of-sequence nodes).
    pub unique: usize,
    /// Stored sequences counting repeated insertions.
    pub total: usize,
    /// Nodes excluding the root.
    pub nodes: usize,
}

/// Number of leading symbols `a` and `b` have in common.
pub fn shared_prefix_len(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

/// Number of leading symbols shared by `sequence` and the node's prefix;
/// 0 when there is no node or it has no prefix.
#[inline]
pub(crate) fn common_prefix_length(sequence: &str, node: Option<&Node>) -> usize {
    match node {
        Some(node) => shared_prefix_len(sequence, &node.prefix),
        None => 0,
    }
}

fn checked(sequence: &str) -> Result<&str, InvalidSequence> {
    validate(sequence).map_err(|err| {
        log::debug!("rejected {:?}: {}", sequence, err);
        err
    })?;
    Ok(sequence)
}

/// A compressed prefix tree over DNA sequences that counts duplicates.
///
/// ```rust
/// use dna_radix::RadixTree;
///
/// let mut tree = RadixTree::new();
/// tree.insert("AAA").unwrap();
/// tree.insert("AAAGC").unwrap();
/// tree.insert("AAA").unwrap();
///
/// assert_eq!(tree.find("AAA"), Ok(true));
/// assert_eq!(tree.find("AA"), Ok(false));
/// assert_eq!(tree.count_unique(), 2);
/// assert_eq!(tree.count_total(), 3);
///
/// let stored: Vec<String> = tree.sequences().map(|s| s.to_string()).collect();
/// assert_eq!(stored, vec!["AAA", "AAAGC"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RadixTree {
    root: Node,
}

impl RadixTree {
    pub fn new() -> Self {
        Self { root: Node::root() }
    }

    /// Stores one occurrence of `sequence`.
    ///
    /// Inserting a sequence that is already present increments its count.
    pub fn insert(&mut self, sequence: impl AsRef<str>) -> Result<(), InvalidSequence> {
        let sequence = checked(sequence.as_ref())?;
        self.insert_validated(sequence);
        Ok(())
    }

    pub(crate) fn insert_validated(&mut self, sequence: &str) {
        insert::insert_below(&mut self.root, sequence);
    }

    /// True if `sequence` is stored. A path that exists only as a shared
    /// branch is not a stored sequence.
    pub fn find(&self, sequence: impl AsRef<str>) -> Result<bool, InvalidSequence> {
        let sequence = checked(sequence.as_ref())?;
        Ok(self.locate(sequence).is_some_and(|node| node.end_of_sequence))
    }

    /// How many times `sequence` has been inserted and not deleted.
    pub fn occurrences(&self, sequence: impl AsRef<str>) -> Result<usize, InvalidSequence> {
        let sequence = checked(sequence.as_ref())?;
        Ok(self
            .locate(sequence)
            .filter(|node| node.end_of_sequence)
            .map_or(0, |node| node.occurrences))
    }

    /// Removes `sequence`, returning whether it was stored.
    ///
    /// A node that still has children cannot go away, so deleting its
    /// sequence only drops one occurrence. A childless node is reclaimed
    /// outright, together with any ancestors left as empty branches.
    pub fn delete(&mut self, sequence: impl AsRef<str>) -> Result<bool, InvalidSequence> {
        let sequence = checked(sequence.as_ref())?;
        Ok(remove::remove_below(&mut self.root, sequence))
    }

    /// The node whose root-to-node path spells exactly `sequence`.
    fn locate(&self, sequence: &str) -> Option<&Node> {
        let mut node = &self.root;
        let mut rest = sequence;

        loop {
            let child = node.children[slot_of(rest)?].as_deref()?;
            let matched = common_prefix_length(rest, Some(child));
            if matched < child.prefix.len() {
                return None;
            }
            if matched == rest.len() {
                return Some(child);
            }
            log::trace!("descend past {:?}", child.prefix);
            rest = &rest[matched..];
            node = child;
        }
    }

    /// Sum of occurrence counts over all stored sequences.
    pub fn count_total(&self) -> usize {
        self.stats().total
    }

    /// Number of distinct stored sequences.
    pub fn count_unique(&self) -> usize {
        self.stats().unique
    }

    /// Number of nodes, not counting the root.
    pub fn count_nodes(&self) -> usize {
        self.stats().nodes
    }

    /// All three counts from a single walk.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        Self::compute_stats(&self.root, &mut stats);
        stats
    }

    fn compute_stats(node: &Node, stats: &mut TreeStats) {
        for child in node.children.iter().flatten() {
            stats.nodes += 1;
            if child.end_of_sequence {
                stats.unique += 1;
                stats.total += child.occurrences;
            }
            Self::compute_stats(child, stats);
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.root.has_child()
    }

    pub fn clear(&mut self) {
        self.root = Node::root();
    }

    /// Every stored sequence, in lexicographic order.
    pub fn sequences(&self) -> Sequences<'_> {
        Sequences::new(&self.root)
    }

    /// Stored sequences with their occurrence counts, in lexicographic order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    /// Every node below the root, in pre-order.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(&self.root)
    }
}

impl<'a> IntoIterator for &'a RadixTree {
    type Item = (crate::Sequence, usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
