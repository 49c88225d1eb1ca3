//! Round state: the dealt board, counters and pending selection.
//!
//! A `Round` is pure state. It knows nothing of timers or presentation;
//! [`GameController`](crate::controller::GameController) owns one and
//! turns its outcomes into scheduled tasks and events.

mod state;

pub use state::{FlipOutcome, FlipRejection, Resolution, Round, RoundId, RoundPhase};
