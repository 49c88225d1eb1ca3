//! Core engine types: configuration and randomness.
//!
//! Everything a round is built from lives here. Collaborators that a host
//! swaps out (the random source) are traits; the rest is plain data.

pub mod config;
pub mod rng;

pub use config::{
    ConfigError, MemoryConfig, DEFAULT_RESOLVE_DELAY, DEFAULT_REVEAL_DELAY,
    DEFAULT_SHAKE_DURATION, DEFAULT_SYMBOLS, MAX_CARDS,
};
pub use rng::{GameRng, GameRngState, IdentityShuffle, RandomSource};
