//! Random sequence generation for stress-filling a tree.

use rand::Rng;

use crate::alphabet::Base;
use crate::{RadixTree, Sequence};

/// Rejected length bounds.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidConfig {
    #[error("minimum length must be at least 1")]
    ZeroMinLength,
    #[error("minimum length {min_len} exceeds maximum length {max_len}")]
    InvertedBounds { min_len: usize, max_len: usize },
}

/// Length bounds for generated sequences, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomConfig {
    min_len: usize,
    max_len: usize,
}

impl RandomConfig {
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, InvalidConfig> {
        if min_len == 0 {
            return Err(InvalidConfig::ZeroMinLength);
        }
        if min_len > max_len {
            return Err(InvalidConfig::InvertedBounds { min_len, max_len });
        }
        Ok(Self { min_len, max_len })
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            min_len: 10,
            max_len: 100,
        }
    }
}

/// A sequence with uniformly chosen length and bases.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, config: &RandomConfig) -> Sequence {
    let len = rng.gen_range(config.min_len..=config.max_len);
    let sequence: String = (0..len)
        .map(|_| Base::ALL[rng.gen_range(0..Base::ALL.len())].as_char())
        .collect();
    Sequence::from_validated(sequence)
}

impl RadixTree {
    /// Inserts `count` random sequences, returning how many were new.
    pub fn fill_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        config: &RandomConfig,
    ) -> usize {
        let before = self.count_unique();
        for _ in 0..count {
            let sequence = random_sequence(rng, config);
            self.insert_validated(&sequence);
        }
        let added = self.count_unique() - before;
        log::debug!("inserted {} random sequences, {} new", count, added);
        added
    }
}
