//! Timer service boundary.
//!
//! The controller never sleeps. Pacing delays become [`ScheduledTask`]s
//! handed to a [`Scheduler`]; the host runs them later through
//! `GameController::fire`. [`ManualClock`] keeps virtual time so logic can
//! be driven synchronously.

mod scheduler;

pub use scheduler::{ManualClock, ScheduledTask, Scheduler};
