//! Sources of randomness for the tour.
//!
//! The tour never reaches for a global generator; callers hand in a
//! [`Random`] so that a run can be made reproducible.

use derive_new::new;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub trait Random {
    fn next_u32(&mut self) -> u32;
}

/// A random source backed by the standard generator.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Random for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.gen()
    }
}

/// A random source that always yields the same value.
#[derive(Clone, Copy, Debug, new)]
pub struct FixedRandom {
    value: u32,
}

impl Random for FixedRandom {
    fn next_u32(&mut self) -> u32 {
        self.value
    }
}
