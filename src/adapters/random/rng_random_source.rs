//! `rand`-backed random source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Random source wrapping any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRandomSource<R = StdRng> {
    rng: R,
}

impl RngRandomSource<StdRng> {
    /// Seeded from operating system entropy.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator; same seed, same diagnoses.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngRandomSource<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> RandomSource for RngRandomSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
