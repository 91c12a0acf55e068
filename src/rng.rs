//! Randomness seam for probe synthesis and pacing jitter.
//!
//! All randomness the loop consumes flows through [`RandomSource`], so
//! tests can drive the simulation with scripted draws and assert exact
//! derived values.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

/// Source of uniform random draws.
pub trait RandomSource: Send {
    /// Uniform draw in [0, 1).
    fn unit(&mut self) -> f64;

    /// Uniform index in [0, n). `n` must be non-zero.
    fn pick(&mut self, n: usize) -> usize;
}

/// Default random source backed by [`StdRng`].
///
/// Live sessions seed from OS entropy; tests and reproductions can pin a
/// seed to replay an identical run.
#[derive(Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Entropy-seeded source for live sessions.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn unit(&mut self) -> f64 {
        self.rng.gen()
    }

    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

/// Generate a random u64 from OS entropy.
pub fn random_u64() -> u64 {
    OsRng.next_u64()
}

/// Fresh 16-hex-char token for event correlation.
pub fn event_token() -> String {
    format!("{:016x}", random_u64())
}
