//! The four-symbol DNA alphabet and validated sequences.
//!
//! Every node in the tree owns exactly one child slot per base, so the
//! alphabet fixes both the fan-out and the child order. Slot order is symbol
//! order (A < C < G < T), which is also ASCII order; a pre-order walk that
//! visits slots in index order therefore yields sequences lexicographically.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::InvalidSequence;

/// Number of child slots per node.
pub const MAX_CHILDREN: usize = 4;

/// The bases, in slot order.
pub const DNA_BASES: &str = "ACGT";

/// A single nucleotide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// All bases in slot order.
    pub const ALL: [Base; MAX_CHILDREN] = [Base::A, Base::C, Base::G, Base::T];

    #[inline]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            _ => None,
        }
    }

    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii() {
            Self::from_byte(ch as u8)
        } else {
            None
        }
    }

    /// Child slot for this base.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Child slot for the first symbol of an already validated sequence.
///
/// Returns `None` for an empty string or a symbol outside the alphabet.
#[inline]
pub(crate) fn slot_of(sequence: &str) -> Option<usize> {
    sequence
        .as_bytes()
        .first()
        .and_then(|&b| Base::from_byte(b))
        .map(Base::index)
}

/// Checks that `sequence` is non-empty and made up only of `A`, `C`, `G`, `T`.
///
/// Reports the first offending symbol; positions count characters, not bytes.
pub fn validate(sequence: &str) -> Result<(), InvalidSequence> {
    if sequence.is_empty() {
        return Err(InvalidSequence::Empty);
    }
    for (position, base) in sequence.chars().enumerate() {
        if Base::from_char(base).is_none() {
            return Err(InvalidSequence::InvalidBase { base, position });
        }
    }
    Ok(())
}

/// True if `sequence` must not be stored: it is empty or contains a symbol
/// outside the alphabet.
pub fn is_invalid(sequence: &str) -> bool {
    validate(sequence).is_err()
}

/// An immutable, validated DNA sequence.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence(Box<str>);

impl Sequence {
    pub fn new(sequence: impl AsRef<str>) -> Result<Self, InvalidSequence> {
        let sequence = sequence.as_ref();
        validate(sequence)?;
        Ok(Self(sequence.into()))
    }

    /// Wraps a string the tree assembled from stored prefixes.
    pub(crate) fn from_validated(sequence: String) -> Self {
        debug_assert!(!is_invalid(&sequence));
        Self(sequence.into_boxed_str())
    }

    pub fn from_bases(bases: impl IntoIterator<Item = Base>) -> Result<Self, InvalidSequence> {
        let sequence: String = bases.into_iter().map(Base::as_char).collect();
        if sequence.is_empty() {
            return Err(InvalidSequence::Empty);
        }
        Ok(Self(sequence.into_boxed_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        // Validated on construction, so every byte maps to a base.
        self.0.bytes().filter_map(Base::from_byte)
    }
}

impl Deref for Sequence {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Sequence {
    type Error = InvalidSequence;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = InvalidSequence;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        validate(&s)?;
        Ok(Self(s.into_boxed_str()))
    }
}

impl PartialEq<str> for Sequence {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Sequence {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}
