//! Error type for rejected input.

/// Returned when a sequence cannot be stored in or looked up from the tree.
///
/// Validation happens before any node is touched, so an operation that
/// returns this error has left the tree unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSequence {
    #[error("empty sequence")]
    Empty,
    #[error("invalid base {base:?} at position {position}: only 'A', 'C', 'G' and 'T' occur in DNA")]
    InvalidBase { base: char, position: usize },
}
