//! Insertion: prefix matching, node splitting and duplicate counting.

use super::common_prefix_length;
use crate::alphabet::slot_of;
use crate::node::Node;

/// Inserts a validated, non-empty `sequence` into the subtree hanging off
/// `parent`, treating `parent` as the dispatch root for this level.
pub(super) fn insert_below(parent: &mut Node, sequence: &str) {
    let slot = match slot_of(sequence) {
        Some(slot) => slot,
        None => unreachable!("sequence validated before insertion"),
    };
    let current = parent.children[slot].take();
    parent.children[slot] = Some(insert_at(current, sequence));
}

/// Inserts `sequence` at the slot currently holding `current` and returns the
/// node that should occupy the slot afterwards.
fn insert_at(current: Option<Box<Node>>, sequence: &str) -> Box<Node> {
    let Some(mut node) = current else {
        log::trace!("new leaf {:?}", sequence);
        return Box::new(Node::leaf(sequence));
    };

    let matched = common_prefix_length(sequence, Some(&node));
    let prefix_len = node.prefix.len();
    debug_assert!(matched > 0, "slot is keyed by the first base of the prefix");

    if matched == sequence.len() {
        if matched == prefix_len {
            // Exactly this node.
            node.mark_end();
        } else {
            // `sequence` is a strict prefix of the stored segment, so this node
            // was not terminal for `sequence` before the split.
            node.split_at(matched);
            node.end_of_sequence = true;
            node.occurrences = 1;
        }
        return node;
    }

    if matched < prefix_len {
        // Divergence inside the segment: keep the shared part as a pure branch.
        node.split_at(matched);
        node.end_of_sequence = false;
        node.occurrences = 0;
    }

    insert_below(&mut node, &sequence[matched..]);
    node
}
