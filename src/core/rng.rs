//! Deterministic random number generation for shuffling and card picks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Reseedable per game**: Each new game derives its own stream
//! - **Serializable**: O(1) state capture and restore for checkpoints
//!
//! ```
//! use elemental_duel::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.pick_index(10), b.pick_index(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    game_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            game_counter: 0,
        }
    }

    /// Derive the stream for the next game.
    ///
    /// Every reset gets a different but reproducible sequence.
    #[must_use]
    pub fn next_game(&mut self) -> Self {
        self.game_counter += 1;
        let game_seed = self
            .seed
            .wrapping_add(self.game_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(game_seed),
            seed: game_seed,
            game_counter: 0,
        }
    }

    /// Pick a uniformly random index in `0..len`.
    ///
    /// Returns `None` for an empty range.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            game_counter: self.game_counter,
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
            game_counter: state.game_counter,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so size is constant no matter how many
/// numbers were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed of the stream
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Games derived so far
    pub game_counter: u64,
}
