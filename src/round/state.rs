//! Round state and its transitions.
//!
//! `Round` holds every invariant of a play-through and nothing else: no
//! timers, no events. The controller drives it and reports what happened.
//!
//! ## Lifecycle
//!
//! ```text
//! deal ──> Playing ──(2nd flip)──> Comparing ──(resolve)──> Playing
//!                                      │
//!                                      └──(last pair)──> Won
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{deck, Card, CardPosition, Symbol};
use crate::core::config::{ConfigError, MAX_CARDS};
use crate::core::rng::RandomSource;

/// Identifies one deal. Each new deal gets a larger id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    /// Create a new round ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id of the deal after this one.
    ///
    /// Saturates at `u64::MAX`, which no game reaches one deal at a time.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Where a round is in its state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Accepting flips.
    Playing,
    /// Two cards are face up awaiting comparison. Flips are ignored.
    Comparing,
    /// Every pair is matched. Terminal until the next deal.
    Won,
}

/// Why a flip attempt was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipRejection {
    /// Nothing has been dealt yet.
    NoRound,
    /// No card at that position.
    OutOfRange,
    /// A comparison is pending.
    Busy,
    /// The card is already face up.
    AlreadyFlipped,
    /// The card is already paired.
    AlreadyMatched,
    /// Two cards are already selected.
    SelectionFull,
    /// The round is over.
    RoundWon,
}

/// Result of a flip attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(FlipRejection),
    /// The card is now face up and is the only pending card.
    Flipped(CardPosition),
    /// The card completed a pair; the round is now comparing.
    PairSelected {
        first: CardPosition,
        second: CardPosition,
    },
}

impl FlipOutcome {
    /// Did the attempt change the round?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }
}

/// Result of comparing a pending pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Same symbol: both cards stay face up for good.
    Match {
        first: CardPosition,
        second: CardPosition,
        symbol: Symbol,
        /// This was the last pair.
        won: bool,
    },
    /// Different symbols: both cards turned back down.
    Mismatch {
        first: CardPosition,
        second: CardPosition,
    },
}

/// One play-through: the dealt cards and the counters.
///
/// Cards live in an `im::Vector`, so cloning a round for a snapshot is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    id: RoundId,
    cards: Vector<Card>,
    attempts: u32,
    matched_pairs: usize,
    total_pairs: usize,
    pending: SmallVec<[CardPosition; 2]>,
    phase: RoundPhase,
}

impl Round {
    /// Deal a fresh round: two cards per symbol, shuffled.
    ///
    /// Fails for the same symbol sets [`MemoryConfig::validate`] rejects.
    ///
    /// [`MemoryConfig::validate`]: crate::core::MemoryConfig::validate
    pub fn deal<R: RandomSource + ?Sized>(
        id: RoundId,
        symbols: &[Symbol],
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        Self::from_deck(id, deck::shuffled(symbols, rng))
    }

    /// Lay out an already-ordered deck, slot `i` getting `deck[i]`.
    ///
    /// The deck must be non-empty, fit in `CardPosition`, and hold every
    /// symbol exactly twice; the win condition counts half its length.
    pub fn from_deck(id: RoundId, deck: Vec<Symbol>) -> Result<Self, ConfigError> {
        if deck.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        if deck.len() > MAX_CARDS {
            return Err(ConfigError::TooManyCards {
                cards: deck.len(),
                max: MAX_CARDS,
            });
        }
        if !deck::is_paired(&deck) {
            return Err(ConfigError::UnpairedDeck);
        }

        let total_pairs = deck.len() / 2;
        let cards = deck
            .into_iter()
            .zip(0..=u16::MAX)
            .map(|(symbol, i)| Card::new(symbol, CardPosition::new(i)))
            .collect();

        Ok(Self {
            id,
            cards,
            attempts: 0,
            matched_pairs: 0,
            total_pairs,
            pending: SmallVec::new(),
            phase: RoundPhase::Playing,
        })
    }

    /// This round's id.
    #[must_use]
    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// A comparison is pending.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase == RoundPhase::Comparing
    }

    /// Every pair has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == RoundPhase::Won
    }

    /// Completed pair selections so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs in the deck.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    /// Cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Card at a position.
    #[must_use]
    pub fn card(&self, position: CardPosition) -> Option<&Card> {
        self.cards.get(position.index())
    }

    /// All cards in board order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Symbols in board order.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.cards.iter().map(|c| c.symbol).collect()
    }

    /// Cards flipped and awaiting comparison, in flip order.
    #[must_use]
    pub fn pending(&self) -> &[CardPosition] {
        &self.pending
    }

    /// Count of face-up, unmatched cards. Always 0, 1 or 2.
    #[must_use]
    pub fn face_up_unmatched(&self) -> usize {
        self.cards.iter().filter(|c| c.is_pending()).count()
    }

    /// Try to turn a card face up.
    ///
    /// Invalid attempts leave the round untouched and say why.
    pub fn try_flip(&mut self, position: CardPosition) -> FlipOutcome {
        let card = match self.cards.get(position.index()) {
            Some(card) => *card,
            None => return FlipOutcome::Ignored(FlipRejection::OutOfRange),
        };

        match self.phase {
            RoundPhase::Won => return FlipOutcome::Ignored(FlipRejection::RoundWon),
            RoundPhase::Comparing => return FlipOutcome::Ignored(FlipRejection::Busy),
            RoundPhase::Playing => {}
        }
        if card.matched {
            return FlipOutcome::Ignored(FlipRejection::AlreadyMatched);
        }
        if card.flipped {
            return FlipOutcome::Ignored(FlipRejection::AlreadyFlipped);
        }
        if self.pending.len() >= 2 {
            return FlipOutcome::Ignored(FlipRejection::SelectionFull);
        }

        self.set_flipped(position, true);
        self.pending.push(position);

        match self.pending.as_slice() {
            [first, second] => {
                self.attempts += 1;
                self.phase = RoundPhase::Comparing;
                FlipOutcome::PairSelected {
                    first: *first,
                    second: *second,
                }
            }
            _ => FlipOutcome::Flipped(position),
        }
    }

    /// Compare the pending pair.
    ///
    /// `first` and `second` must be the pair returned by the flip that
    /// entered `Comparing`; anything else returns `None` and changes
    /// nothing.
    pub fn resolve(&mut self, first: CardPosition, second: CardPosition) -> Option<Resolution> {
        if self.phase != RoundPhase::Comparing || self.pending.as_slice() != [first, second] {
            return None;
        }

        let a = self.cards.get(first.index())?.symbol;
        let b = self.cards.get(second.index())?.symbol;

        self.pending.clear();

        let resolution = if a == b {
            self.set_matched(first);
            self.set_matched(second);
            self.matched_pairs += 1;
            let won = self.matched_pairs == self.total_pairs;
            Resolution::Match {
                first,
                second,
                symbol: a,
                won,
            }
        } else {
            self.set_flipped(first, false);
            self.set_flipped(second, false);
            Resolution::Mismatch { first, second }
        };

        self.phase = if self.matched_pairs == self.total_pairs {
            RoundPhase::Won
        } else {
            RoundPhase::Playing
        };

        Some(resolution)
    }

    fn set_flipped(&mut self, position: CardPosition, flipped: bool) {
        if let Some(card) = self.cards.get_mut(position.index()) {
            card.flipped = flipped;
        }
    }

    fn set_matched(&mut self, position: CardPosition) {
        if let Some(card) = self.cards.get_mut(position.index()) {
            card.matched = true;
        }
    }
}
