//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Per-round streams**: Each round derives an independent stream, so a
//!   seed fixes the whole sequence of deals regardless of how much
//!   randomness earlier rounds consumed
//! - **Serializable**: O(1) state capture and restore for session snapshots
//!
//! ## Usage
//!
//! ```
//! use match_grid::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Round streams are independent...
//! let mut round1 = rng.for_round(1);
//! let mut round2 = rng.for_round(2);
//! let a: Vec<_> = (0..8).map(|_| round1.gen_range_usize(0..1000)).collect();
//! let b: Vec<_> = (0..8).map(|_| round2.gen_range_usize(0..1000)).collect();
//! assert_ne!(a, b);
//!
//! // ...but reproducible: same seed, same round, same sequence
//! let mut again = GameRng::new(42).for_round(1);
//! let c: Vec<_> = (0..8).map(|_| again.gen_range_usize(0..1000)).collect();
//! assert_eq!(a, c);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Deterministic RNG backing the shuffle.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness. The
/// shuffle it performs is rand's Fisher-Yates, so every permutation of the
/// dealt cards is equally likely.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive an independent stream for a given round.
    ///
    /// The same `(seed, round)` always produces the same stream, so a deal
    /// can be reproduced without replaying every earlier round.
    #[must_use]
    pub fn for_round(&self, round: u64) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        round.hash(&mut hasher);
        let round_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(round_seed),
            seed: round_seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for session snapshots.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of how
/// many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Effective seed of the current stream.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
