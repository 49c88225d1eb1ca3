//! # memory-match
//!
//! Game-state core for a card memory matching game: a board of face-down
//! cards, two of each symbol, where the player turns over two at a time
//! looking for pairs.
//!
//! ## Design Principles
//!
//! 1. **No presentation**: The core emits [`GameEvent`]s; rendering,
//!    animation and celebration effects live in whoever subscribes.
//!
//! 2. **Injected time and chance**: Pacing delays go through a
//!    [`Scheduler`], dealing through a [`RandomSource`]. With
//!    [`ManualClock`] and zero delays the whole game runs synchronously.
//!
//! 3. **Configuration over constants**: The symbol set decides the deck
//!    size and the number of pairs needed to win.
//!
//! ## Modules
//!
//! - `core`: configuration and random sources
//! - `cards`: symbols, cards, deck building and shuffling
//! - `round`: pure round state and its transitions
//! - `events`: the event stream and sinks
//! - `timing`: scheduled tasks and schedulers
//! - `controller`: `GameController`, tying it all together

pub mod core;
pub mod cards;
pub mod round;
pub mod events;
pub mod timing;
pub mod controller;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, MemoryConfig,
    GameRng, GameRngState, IdentityShuffle, RandomSource,
};

pub use crate::cards::{Card, CardPosition, Symbol};

pub use crate::round::{FlipOutcome, FlipRejection, Resolution, Round, RoundId, RoundPhase};

pub use crate::events::{EventLog, EventSink, GameEvent, NullSink};

pub use crate::timing::{ManualClock, ScheduledTask, Scheduler};

pub use crate::controller::{ControllerPhase, GameController};
