//! Deterministic random number generation for shuffles.
//!
//! Uses ChaCha8 so that a seeded editor produces identical shuffle
//! sequences across runs, which keeps tests and replays deterministic.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by section shuffles.
///
/// `shuffle` applies the Fisher-Yates algorithm (via `rand`'s slice
/// shuffle), producing a uniformly random permutation.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
