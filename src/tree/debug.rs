//! Structural checks for troubleshooting and tests.

use super::RadixTree;
use crate::alphabet::{is_invalid, slot_of};
use crate::node::Node;

impl RadixTree {
    /// Verify tree integrity - returns list of issues found.
    ///
    /// Single-child branches are allowed: deletion never merges nodes.
    pub fn verify_integrity(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let root = &self.root;
        if !root.prefix.is_empty() {
            issues.push(format!("root has prefix {:?}", root.prefix));
        }
        if root.end_of_sequence || root.occurrences != 0 {
            issues.push("root marks a sequence".to_string());
        }

        Self::verify_children(root, &mut issues, "");
        issues
    }

    fn verify_children(node: &Node, issues: &mut Vec<String>, path: &str) {
        for (slot, child) in node.children.iter().enumerate() {
            let Some(child) = child else {
                continue;
            };
            let child_path = format!("{}{}", path, child.prefix);

            if child.prefix.is_empty() {
                issues.push(format!("empty prefix below {:?} in slot {}", path, slot));
            } else if is_invalid(&child.prefix) {
                issues.push(format!("invalid prefix {:?} at {:?}", child.prefix, child_path));
            } else if slot_of(&child.prefix) != Some(slot) {
                issues.push(format!(
                    "prefix {:?} stored in slot {} at {:?}",
                    child.prefix, slot, child_path
                ));
            }

            if child.end_of_sequence != (child.occurrences > 0) {
                issues.push(format!(
                    "end_of_sequence={} with {} occurrences at {:?}",
                    child.end_of_sequence, child.occurrences, child_path
                ));
            }
            if !child.end_of_sequence && !child.has_child() {
                issues.push(format!("superfluous node at {:?}", child_path));
            }

            Self::verify_children(child, issues, &child_path);
        }
    }
}
