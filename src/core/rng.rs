//! Random sources for dealing.
//!
//! The controller never reaches for ambient randomness. It is handed a
//! [`RandomSource`] at construction:
//!
//! - [`GameRng`]: seeded ChaCha8 stream, the normal choice
//! - [`IdentityShuffle`]: never reorders, so a deal keeps deck order
//!
//! ```
//! use memory_match::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.index_at_most(15), b.index_at_most(15));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform indices used by the shuffle.
pub trait RandomSource {
    /// Return a uniformly distributed index in `0..=max`.
    fn index_at_most(&mut self, max: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index_at_most(&mut self, max: usize) -> usize {
        (**self).index_at_most(max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn index_at_most(&mut self, max: usize) -> usize {
        (**self).index_at_most(max)
    }
}

/// Deterministic RNG for dealing.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
/// Same seed, same sequence of deals.
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for checkpointing.
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

impl RandomSource for GameRng {
    fn index_at_most(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture and restore are O(1)
/// regardless of how many deals have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A random source that always picks the upper bound.
///
/// Fisher–Yates then swaps every element with itself, leaving the deck in
/// construction order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityShuffle;

impl RandomSource for IdentityShuffle {
    fn index_at_most(&mut self, max: usize) -> usize {
        max
    }
}
