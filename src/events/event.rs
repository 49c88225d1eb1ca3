//! Game event types.
//!
//! Events are the only thing the core tells the outside world. A
//! presentation layer subscribes and turns them into whatever it draws:
//! card elements, CSS classes, fireworks. The core never reads anything
//! back.

use serde::{Deserialize, Serialize};

use crate::cards::{CardPosition, Symbol};

/// Something that happened that the presentation layer may want to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The splash screen was dismissed.
    GameStarted,

    /// The board became visible after the reveal delay.
    BoardShown,

    /// Every card element of the previous round should be removed.
    BoardCleared,

    /// Any win message and celebration effects should be removed.
    CelebrationCleared,

    /// A face-down card was placed at `position`.
    CardDealt {
        position: CardPosition,
        symbol: Symbol,
    },

    /// The attempt counter changed.
    AttemptsChanged { attempts: u32 },

    /// A card was turned face up.
    CardFlipped {
        position: CardPosition,
        symbol: Symbol,
    },

    /// Both cards are now permanently matched.
    CardsMatched {
        first: CardPosition,
        second: CardPosition,
    },

    /// Both cards were turned back down; the shake cue starts.
    CardsMismatched {
        first: CardPosition,
        second: CardPosition,
    },

    /// The shake cue on these cards is over.
    ShakeEnded {
        first: CardPosition,
        second: CardPosition,
    },

    /// Every pair was found. Requests the win message and celebration.
    RoundWon { attempts: u32 },
}

impl GameEvent {
    /// Short, stable name for the event kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::GameStarted => "game_started",
            GameEvent::BoardShown => "board_shown",
            GameEvent::BoardCleared => "board_cleared",
            GameEvent::CelebrationCleared => "celebration_cleared",
            GameEvent::CardDealt { .. } => "card_dealt",
            GameEvent::AttemptsChanged { .. } => "attempts_changed",
            GameEvent::CardFlipped { .. } => "card_flipped",
            GameEvent::CardsMatched { .. } => "cards_matched",
            GameEvent::CardsMismatched { .. } => "cards_mismatched",
            GameEvent::ShakeEnded { .. } => "shake_ended",
            GameEvent::RoundWon { .. } => "round_won",
        }
    }

    /// Board positions the event refers to, in order.
    #[must_use]
    pub fn positions(&self) -> Vec<CardPosition> {
        match *self {
            GameEvent::CardDealt { position, .. } | GameEvent::CardFlipped { position, .. } => {
                vec![position]
            }
            GameEvent::CardsMatched { first, second }
            | GameEvent::CardsMismatched { first, second }
            | GameEvent::ShakeEnded { first, second } => vec![first, second],
            _ => Vec::new(),
        }
    }
}
