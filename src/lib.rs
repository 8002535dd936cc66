//! # dna-radix
//!
//! A compressed prefix tree (radix tree) over DNA sequences.
//!
//! Sequences are strings over the alphabet `A`, `C`, `G`, `T`. Each node
//! stores a multi-base segment and owns one child slot per base, so chains of
//! single-child nodes never form on insertion. Inserting a sequence that is
//! already present bumps its occurrence count instead of adding a node.
//!
//! ## Example
//!
//! ```rust
//! use dna_radix::{InvalidSequence, RadixTree};
//!
//! let mut tree = RadixTree::new();
//! tree.insert("AAAGC").unwrap();
//! tree.insert("AAACC").unwrap();
//!
//! // "AAA" exists only as the shared branch of the two sequences.
//! assert_eq!(tree.find("AAA"), Ok(false));
//! assert_eq!(tree.find("AAACC"), Ok(true));
//! assert_eq!(tree.count_nodes(), 3);
//!
//! assert_eq!(tree.insert("AAXA"), Err(InvalidSequence::InvalidBase { base: 'X', position: 2 }));
//!
//! let sorted: Vec<String> = tree.sequences().map(|s| s.to_string()).collect();
//! assert_eq!(sorted, vec!["AAACC", "AAAGC"]);
//! ```
//!
//! The tree is a plain owned structure with no interior mutability; wrap it
//! in a lock to share it between threads.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod alphabet;
mod error;
mod node;
#[cfg(feature = "random")]
pub mod random;
mod tree;

pub use alphabet::{is_invalid, validate, Base, Sequence};
pub use error::InvalidSequence;
#[cfg(feature = "random")]
pub use random::{random_sequence, InvalidConfig, RandomConfig};
pub use tree::{shared_prefix_len, Iter, NodeInfo, Nodes, RadixTree, Sequences, TreeStats};

#[cfg(test)]
mod proptests;
