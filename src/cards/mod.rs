//! Cards and decks.
//!
//! - `Card`: a symbol at a board position, plus its face-up/matched flags
//! - `deck`: building, shuffling and checking paired decks

pub mod card;
pub mod deck;

pub use card::{Card, CardPosition, Symbol};
