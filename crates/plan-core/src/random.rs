//! Injectable source of uniform randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed numbers in `[0, 1)`.
///
/// Tip sampling draws from this trait so callers decide between
/// reproducible and entropy-backed generation.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

/// Random source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Reproducible source; the same seed yields the same sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
