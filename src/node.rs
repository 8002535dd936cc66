//! Tree nodes.
//!
//! A node stores the segment of a sequence it contributes relative to its
//! parent, never the full path from the root. Children live in one slot per
//! base, keyed by the first symbol of the child's prefix, and are owned by
//! value: there are no back references, so moving a whole child array during
//! a split is a plain `mem::take`.

use std::mem;

use crate::alphabet::{slot_of, MAX_CHILDREN};

pub(crate) type Children = [Option<Box<Node>>; MAX_CHILDREN];

#[derive(Clone, Debug, Default)]
pub(crate) struct Node {
    /// Segment relative to the parent. Empty only for the root.
    pub(crate) prefix: String,
    /// The root-to-node path is a stored sequence.
    pub(crate) end_of_sequence: bool,
    /// How many times the sequence ending here was inserted.
    pub(crate) occurrences: usize,
    pub(crate) children: Children,
}

impl Node {
    /// The dispatcher at the top of every tree: empty prefix, never terminal.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// A fresh terminal node holding one occurrence of `prefix`.
    pub(crate) fn leaf(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            end_of_sequence: true,
            occurrences: 1,
            children: Default::default(),
        }
    }

    #[inline]
    pub(crate) fn has_child(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.iter().flatten().count()
    }

    /// Records one more occurrence of the sequence ending here.
    pub(crate) fn mark_end(&mut self) {
        self.end_of_sequence = true;
        self.occurrences += 1;
    }

    /// Pushes `prefix[at..]` down into a new child.
    ///
    /// The new child inherits every existing child along with the terminal
    /// state, so the sequences below this node are unchanged. Afterwards this
    /// node has exactly one child; the caller decides its terminal state.
    pub(crate) fn split_at(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.prefix.len());

        let suffix = self.prefix.split_off(at);
        let slot = match slot_of(&suffix) {
            Some(slot) => slot,
            None => unreachable!("stored prefixes contain only DNA bases"),
        };
        log::debug!("split {:?} | {:?}", self.prefix, suffix);

        let pushed_down = Node {
            prefix: suffix,
            end_of_sequence: self.end_of_sequence,
            occurrences: self.occurrences,
            children: mem::take(&mut self.children),
        };
        self.children[slot] = Some(Box::new(pushed_down));
    }
}
