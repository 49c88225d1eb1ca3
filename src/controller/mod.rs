//! Game controller: the single component that runs a memory game.
//!
//! The controller owns the round, accepts the three external triggers
//! (start, flip attempt, reset), and runs scheduled tasks handed back by
//! the host. Collaborators are injected:
//!
//! - [`RandomSource`](crate::core::RandomSource) for dealing
//! - [`Scheduler`](crate::timing::Scheduler) for the pacing delays
//! - [`EventSink`](crate::events::EventSink) for presentation

mod game;

pub use game::{ControllerPhase, GameController};
