//! Seedable random number generation for deck shuffles.
//!
//! Every shuffle in a session goes through a [`GameRng`], so a session
//! built from the same seed deals the same cards in the same order.
//!
//! ```
//! use lighthouse_keeper::core::GameRng;
//!
//! let rng = GameRng::new(7);
//!
//! // Independent streams for the two decks
//! let mut actions = rng.for_context("action-deck");
//! let mut storms = rng.for_context("storm-deck");
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut b = a.clone();
//! actions.shuffle(&mut a);
//! storms.shuffle(&mut b);
//! assert_ne!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Deterministic RNG backed by ChaCha8.
///
/// Supports forking (a fresh game after a restart) and context streams
/// (separate randomness for the action deck and the storm deck).
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into an independent, deterministic branch.
    ///
    /// Successive forks of the same RNG produce different sequences.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a named purpose.
    ///
    /// The same context always yields the same stream for the same seed.
    /// Hashed with `FxHasher` so the stream does not change between Rust
    /// releases.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        Self::new(hasher.finish())
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
