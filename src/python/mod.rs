//! Python bindings for the memory-match game core.
//!
//! Python hosts drive the game and render it themselves. Time is virtual:
//! the host calls `advance(ms)` as its own clock ticks.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(seed=42)
//! game.start()
//! game.advance(800)          # reveal delay
//!
//! game.flip(0)
//! game.flip(5)
//! game.advance(1000)         # resolve delay
//!
//! for event in game.drain_events():
//!     print(event.kind, event.positions)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// memory_match: game-state core for a card memory matching game.
///
/// This module provides:
/// - MemoryGame, the controller on a virtual clock
/// - Card and GameEvent value types
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyGameEvent>()?;
    m.add_class::<PyMemoryGame>()?;

    Ok(())
}
