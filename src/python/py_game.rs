//! Game controller bindings for Python.

use std::time::Duration;

use pyo3::prelude::*;

use crate::cards::{CardPosition, Symbol};
use crate::controller::{ControllerPhase, GameController};
use crate::core::{GameRng, MemoryConfig};
use crate::events::EventLog;
use crate::round::Round;
use crate::timing::ManualClock;

use super::py_core::{PyCard, PyGameEvent};

/// Python wrapper for a game controller on a virtual clock.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    game: GameController<GameRng, ManualClock, EventLog>,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game on the splash screen.
    ///
    /// # Arguments
    /// - seed: RNG seed; random if omitted
    /// - symbols: one character per pair; the classic eight if omitted
    /// - instant: zero every pacing delay
    #[new]
    #[pyo3(signature = (seed = None, symbols = None, instant = false))]
    fn new(seed: Option<u64>, symbols: Option<String>, instant: bool) -> PyResult<Self> {
        let mut config = MemoryConfig::new();
        if let Some(symbols) = symbols {
            config = config.with_symbols(symbols.chars().map(Symbol::new));
        }
        if instant {
            config = config.without_delays();
        }

        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let game = GameController::new(config, rng, ManualClock::new(), EventLog::new())
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

        Ok(Self { game })
    }

    /// Dismiss the splash screen.
    fn start(&mut self) {
        self.game.start();
    }

    /// Deal a new round.
    fn reset(&mut self) {
        self.game.reset();
    }

    /// Try to turn a card face up. Returns whether anything changed.
    fn flip(&mut self, position: u16) -> bool {
        self.game.attempt_flip(CardPosition::new(position)).is_accepted()
    }

    /// Move virtual time forward by `ms` milliseconds.
    fn advance(&mut self, ms: u64) {
        self.game.advance(Duration::from_millis(ms));
    }

    /// Run every pending task regardless of its delay.
    fn settle(&mut self) {
        self.game.settle();
    }

    /// Take every event emitted since the last call.
    fn drain_events(&mut self) -> Vec<PyGameEvent> {
        self.game
            .sink_mut()
            .drain()
            .into_iter()
            .map(PyGameEvent::from)
            .collect()
    }

    /// Cards in board order (empty before the first deal).
    fn cards(&self) -> Vec<PyCard> {
        self.game
            .round()
            .map(|round| round.cards().map(PyCard::from).collect())
            .unwrap_or_default()
    }

    /// Seed the deals are drawn from.
    #[getter]
    fn seed(&self) -> u64 {
        self.game.rng().seed()
    }

    #[getter]
    fn attempts(&self) -> u32 {
        self.game.attempts()
    }

    #[getter]
    fn matched_pairs(&self) -> usize {
        self.game.matched_pairs()
    }

    #[getter]
    fn total_pairs(&self) -> usize {
        self.game.config().pair_count()
    }

    #[getter]
    fn is_busy(&self) -> bool {
        self.game.is_busy()
    }

    #[getter]
    fn is_won(&self) -> bool {
        self.game.is_won()
    }

    /// Milliseconds of virtual time elapsed.
    #[getter]
    fn now_ms(&self) -> u64 {
        self.game.scheduler().now().as_millis() as u64
    }

    /// "splash", "revealing", "playing", "comparing" or "won".
    #[getter]
    fn phase(&self) -> &'static str {
        match (self.game.phase(), self.game.round().map(Round::phase)) {
            (ControllerPhase::Splash, _) => "splash",
            (ControllerPhase::Revealing, _) => "revealing",
            (ControllerPhase::InRound, Some(crate::round::RoundPhase::Comparing)) => "comparing",
            (ControllerPhase::InRound, Some(crate::round::RoundPhase::Won)) => "won",
            (ControllerPhase::InRound, _) => "playing",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "MemoryGame(phase={}, attempts={}, matched={}/{})",
            self.phase(),
            self.attempts(),
            self.matched_pairs(),
            self.total_pairs()
        )
    }
}
