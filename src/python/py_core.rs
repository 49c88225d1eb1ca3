//! Value type bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;
use crate::events::GameEvent;

/// Python view of a card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard {
    #[pyo3(get)]
    pub symbol: String,
    #[pyo3(get)]
    pub position: u16,
    #[pyo3(get)]
    pub flipped: bool,
    #[pyo3(get)]
    pub matched: bool,
}

impl From<&Card> for PyCard {
    fn from(card: &Card) -> Self {
        Self {
            symbol: card.symbol.to_string(),
            position: card.position.0,
            flipped: card.flipped,
            matched: card.matched,
        }
    }
}

#[pymethods]
impl PyCard {
    fn __repr__(&self) -> String {
        format!(
            "Card(position={}, symbol={:?}, flipped={}, matched={})",
            self.position, self.symbol, self.flipped, self.matched
        )
    }
}

/// Python view of a game event.
///
/// `kind` names the event; the other fields are set when the event carries
/// them.
#[pyclass(name = "GameEvent")]
#[derive(Clone, Debug)]
pub struct PyGameEvent {
    #[pyo3(get)]
    pub kind: String,
    #[pyo3(get)]
    pub positions: Vec<u16>,
    #[pyo3(get)]
    pub symbol: Option<String>,
    #[pyo3(get)]
    pub attempts: Option<u32>,
}

impl From<GameEvent> for PyGameEvent {
    fn from(event: GameEvent) -> Self {
        let symbol = match event {
            GameEvent::CardDealt { symbol, .. } | GameEvent::CardFlipped { symbol, .. } => {
                Some(symbol.to_string())
            }
            _ => None,
        };
        let attempts = match event {
            GameEvent::AttemptsChanged { attempts } | GameEvent::RoundWon { attempts } => {
                Some(attempts)
            }
            _ => None,
        };

        Self {
            kind: event.kind().to_string(),
            positions: event.positions().into_iter().map(|p| p.0).collect(),
            symbol,
            attempts,
        }
    }
}

#[pymethods]
impl PyGameEvent {
    fn __repr__(&self) -> String {
        format!("GameEvent({}, positions={:?})", self.kind, self.positions)
    }
}
