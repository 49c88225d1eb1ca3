//! Event output: the boundary with the presentation layer.
//!
//! The controller emits [`GameEvent`]s into an [`EventSink`] as state
//! changes. Rendering, animation and celebration effects subscribe there;
//! the core depends on no UI toolkit.

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink, NullSink};
