//! Deletion without merging.
//!
//! Nodes are never merged back together. A node is reclaimed only once it
//! has no children and no longer terminates a sequence.

use super::common_prefix_length;
use crate::alphabet::slot_of;
use crate::node::Node;

/// Deletes `sequence` from the subtree hanging off `parent`.
pub(super) fn remove_below(parent: &mut Node, sequence: &str) -> bool {
    let Some(slot) = slot_of(sequence) else {
        return false;
    };
    let Some(child) = parent.children[slot].take() else {
        return false;
    };
    let (kept, removed) = remove_at(child, sequence);
    parent.children[slot] = kept;
    removed
}

/// Returns what should occupy `node`'s slot afterwards and whether
/// `sequence` was found.
fn remove_at(mut node: Box<Node>, sequence: &str) -> (Option<Box<Node>>, bool) {
    let matched = common_prefix_length(sequence, Some(&node));
    if matched < node.prefix.len() {
        // No partial deletions.
        return (Some(node), false);
    }

    if matched == sequence.len() {
        if !node.end_of_sequence {
            return (Some(node), false);
        }
        if node.has_child() {
            // Children must stay reachable.
            node.occurrences = node.occurrences.saturating_sub(1);
            if node.occurrences == 0 {
                node.end_of_sequence = false;
            }
            return (Some(node), true);
        }
        log::debug!(
            "reclaim leaf {:?} ({} occurrences)",
            node.prefix,
            node.occurrences
        );
        return (None, true);
    }

    let removed = remove_below(&mut node, &sequence[matched..]);
    if removed && !node.has_child() && !node.end_of_sequence {
        log::debug!("reclaim empty branch {:?}", node.prefix);
        return (None, true);
    }
    (Some(node), removed)
}
