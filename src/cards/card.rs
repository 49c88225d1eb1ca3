//! Card identity and runtime state.

use serde::{Deserialize, Serialize};

/// Face value printed on a card.
///
/// A single displayable character. The engine only compares symbols for
/// equality; what they look like is up to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    /// Create a symbol from its glyph.
    #[must_use]
    pub const fn new(glyph: char) -> Self {
        Self(glyph)
    }

    /// Get the glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slot a card occupies on the board, fixed after the deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardPosition(pub u16);

impl CardPosition {
    /// Create a new position.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the position as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the board.
///
/// `flipped` means face up. A matched card stays face up for the rest of
/// the round, so `matched` implies `flipped`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Face value.
    pub symbol: Symbol,

    /// Board slot.
    pub position: CardPosition,

    /// Is the face showing?
    pub flipped: bool,

    /// Has this card been paired?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(symbol: Symbol, position: CardPosition) -> Self {
        Self {
            symbol,
            position,
            flipped: false,
            matched: false,
        }
    }

    /// Face up but not yet paired: part of the pending selection.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.flipped && !self.matched
    }

    /// Can a flip attempt on this card succeed, ignoring round state?
    #[must_use]
    pub const fn is_face_down(&self) -> bool {
        !self.flipped && !self.matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(Symbol::new('A'), CardPosition::new(3));
        assert!(card.is_face_down());
        assert!(!card.is_pending());
        assert_eq!(card.position.index(), 3);
    }

    #[test]
    fn test_pending_states() {
        let mut card = Card::new(Symbol::new('A'), CardPosition::new(0));
        card.flipped = true;
        assert!(card.is_pending());

        card.matched = true;
        assert!(!card.is_pending());
        assert!(!card.is_face_down());
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::new('⚽').to_string(), "⚽");
        assert_eq!(Symbol::new('🎸').glyph(), '🎸');
        assert_eq!(CardPosition::new(12).to_string(), "Card(12)");
    }
}
