//! RNG module - uniform random piece generation
//!
//! Every draw picks one of the seven kinds uniformly and independently of all
//! previous draws. There is no bag: the same piece can come up several times
//! in a row, and a kind can be absent for a long stretch.
//!
//! Seeded generators are deterministic, which keeps tests reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::PieceKind;

#[derive(Debug, Clone)]
enum Source {
    Uniform(Pcg32),
    /// Fixed cycle of kinds, for tests and demos
    Scripted {
        sequence: Vec<PieceKind>,
        index: usize,
    },
}

/// Piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    source: Source,
    seed: Option<u64>,
}

impl PieceGenerator {
    /// Create a uniform generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            source: Source::Uniform(Pcg32::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    /// Create a uniform generator seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Create a generator that cycles through `sequence` forever.
    ///
    /// An empty sequence cycles through every kind in catalog order.
    pub fn scripted(sequence: &[PieceKind]) -> Self {
        let sequence = if sequence.is_empty() {
            PieceKind::ALL.to_vec()
        } else {
            sequence.to_vec()
        };
        Self {
            source: Source::Scripted { sequence, index: 0 },
            seed: None,
        }
    }

    /// Draw the next piece kind
    pub fn next(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Uniform(rng) => PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())],
            Source::Scripted { sequence, index } => {
                let kind = sequence[*index % sequence.len()];
                *index = (*index + 1) % sequence.len();
                kind
            }
        }
    }

    /// Seed the uniform stream was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}
