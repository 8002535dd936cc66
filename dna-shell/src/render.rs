//! Console output for listings, counts and the tree view.

use std::io::{self, Write};

use dna_radix::{NodeInfo, RadixTree, TreeStats};

const RULE: &str = "     *********************************************";

/// Which counts a summary box shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Unique and total sequences.
    Sequences,
    /// Unique and total sequences plus nodes.
    Full,
    Total,
    Nodes,
}

pub fn summary(out: &mut impl Write, stats: &TreeStats, which: Summary) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    if matches!(which, Summary::Sequences | Summary::Full) {
        writeln!(out, "     ** Number of unique sequences in the tree = {}", stats.unique)?;
    }
    if which != Summary::Nodes {
        writeln!(out, "     ** Number of total sequences in the tree  = {}", stats.total)?;
    }
    if matches!(which, Summary::Full | Summary::Nodes) {
        writeln!(out, "     ** Number of nodes in the tree            = {}", stats.nodes)?;
    }
    writeln!(out, "{}", RULE)
}

/// Counts around a mutation.
pub fn before_after(
    out: &mut impl Write,
    action: &str,
    before: &TreeStats,
    after: &TreeStats,
) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "     ******** {} successful!", action)?;
    writeln!(out, "     ** Unique sequences BEFORE = {}", before.unique)?;
    writeln!(out, "     ** Total sequences BEFORE  = {}", before.total)?;
    writeln!(out, "     ** Unique sequences AFTER  = {}", after.unique)?;
    writeln!(out, "     ** Total sequences AFTER   = {}", after.total)?;
    writeln!(out, "{}", RULE)
}

/// One line per stored sequence in traversal order; repeats get a count.
pub fn listing(out: &mut impl Write, tree: &RadixTree) -> io::Result<()> {
    for (sequence, occurrences) in tree {
        if occurrences > 1 {
            writeln!(out, "{} x{}", sequence, occurrences)?;
        } else {
            writeln!(out, "{}", sequence)?;
        }
    }
    Ok(())
}

/// Stored sequences sorted alphabetically, each once.
pub fn sorted(out: &mut impl Write, tree: &RadixTree) -> io::Result<()> {
    let mut sequences: Vec<_> = tree.sequences().collect();
    sequences.sort_unstable();
    for sequence in sequences {
        writeln!(out, "{}", sequence)?;
    }
    Ok(())
}

/// The level view: one line per stored sequence, its own segment in
/// parentheses after the segments of its ancestors.
pub fn tree_view(out: &mut impl Write, tree: &RadixTree) -> io::Result<()> {
    for node in tree.nodes().filter(|n| n.end_of_sequence) {
        writeln!(out, "{}", level_line(&node))?;
    }
    Ok(())
}

pub fn level_line(node: &NodeInfo<'_>) -> String {
    let ancestors = &node.path[..node.path.len() - node.prefix.len()];
    if ancestors.is_empty() {
        format!("Level {}: {}", node.depth, node.path)
    } else {
        format!("Level {}: {}({})", node.depth, ancestors, node.prefix)
    }
}
