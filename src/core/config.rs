//! Game configuration.
//!
//! A `MemoryConfig` fixes everything a round is built from:
//! - the symbol set (each symbol is dealt twice)
//! - the pacing delays the controller schedules
//!
//! The pair count needed to win is derived from the symbol set, never
//! hardcoded.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Symbol;

/// Delay between dismissing the splash and dealing the first round.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Delay between the second flip and the comparison.
pub const DEFAULT_RESOLVE_DELAY: Duration = Duration::from_millis(1000);

/// How long the mismatch shake cue stays on.
pub const DEFAULT_SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Largest deck whose positions fit a `CardPosition`.
pub const MAX_CARDS: usize = u16::MAX as usize + 1;

/// The symbols of the classic 4×4 board: five objects and three digits.
pub const DEFAULT_SYMBOLS: [char; 8] = ['⚽', '🎸', '📱', '🚗', '🏠', '1', '2', '3'];

/// Invalid configuration, reported when a controller or round is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("symbol set is empty")]
    NoSymbols,
    #[error("symbol {0} appears more than once in the symbol set")]
    DuplicateSymbol(Symbol),
    #[error("deck of {cards} cards exceeds the maximum of {max}")]
    TooManyCards { cards: usize, max: usize },
    #[error("deck does not hold every symbol exactly twice")]
    UnpairedDeck,
}

/// Configuration for a memory game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Face values; each is dealt exactly twice.
    pub symbols: Vec<Symbol>,

    /// Delay before the board is dealt after `start()`.
    pub reveal_delay: Duration,

    /// Delay before a pair of flipped cards is compared.
    pub resolve_delay: Duration,

    /// Lifetime of the mismatch shake cue.
    pub shake_duration: Duration,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().copied().map(Symbol::new).collect(),
            reveal_delay: DEFAULT_REVEAL_DELAY,
            resolve_delay: DEFAULT_RESOLVE_DELAY,
            shake_duration: DEFAULT_SHAKE_DURATION,
        }
    }
}

impl MemoryConfig {
    /// Classic configuration: eight symbols, interactive pacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classic symbols with every delay set to zero.
    ///
    /// Scheduled continuations still go through the scheduler, they are
    /// just due immediately.
    #[must_use]
    pub fn instant() -> Self {
        Self::default().without_delays()
    }

    /// Replace the symbol set.
    #[must_use]
    pub fn with_symbols(mut self, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        self.symbols = symbols.into_iter().collect();
        self
    }

    /// Set the post-start reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Set the comparison delay.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    /// Set the shake cue duration.
    #[must_use]
    pub fn with_shake_duration(mut self, duration: Duration) -> Self {
        self.shake_duration = duration;
        self
    }

    /// Zero every delay.
    #[must_use]
    pub fn without_delays(self) -> Self {
        self.with_reveal_delay(Duration::ZERO)
            .with_resolve_delay(Duration::ZERO)
            .with_shake_duration(Duration::ZERO)
    }

    /// Number of pairs in a full deck, and so the number needed to win.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of cards in a full deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len() * 2
    }

    /// Check the symbol set can be dealt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }

        let mut seen = FxHashSet::default();
        for &symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
        }

        let cards = self.card_count();
        if cards > MAX_CARDS {
            return Err(ConfigError::TooManyCards {
                cards,
                max: MAX_CARDS,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_board() {
        let config = MemoryConfig::new();
        assert_eq!(config.pair_count(), 8);
        assert_eq!(config.card_count(), 16);
        assert_eq!(config.resolve_delay, Duration::from_millis(1000));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_instant_zeroes_delays() {
        let config = MemoryConfig::instant();
        assert_eq!(config.reveal_delay, Duration::ZERO);
        assert_eq!(config.resolve_delay, Duration::ZERO);
        assert_eq!(config.shake_duration, Duration::ZERO);
        assert_eq!(config.pair_count(), 8);
    }

    #[test]
    fn test_empty_symbols_rejected() {
        let config = MemoryConfig::new().with_symbols(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::NoSymbols));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let config = MemoryConfig::new().with_symbols("ABCA".chars().map(Symbol::new));
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateSymbol(Symbol::new('A')))
        );
    }

    #[test]
    fn test_pair_count_follows_symbols() {
        let config = MemoryConfig::new().with_symbols("XYZ".chars().map(Symbol::new));
        assert_eq!(config.pair_count(), 3);
        assert_eq!(config.card_count(), 6);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ConfigError::NoSymbols.to_string(), "symbol set is empty");
        assert_eq!(
            ConfigError::DuplicateSymbol(Symbol::new('Q')).to_string(),
            "symbol Q appears more than once in the symbol set"
        );
        assert_eq!(
            ConfigError::UnpairedDeck.to_string(),
            "deck does not hold every symbol exactly twice"
        );
    }

    #[test]
    fn test_config_serde() {
        let config = MemoryConfig::new().with_resolve_delay(Duration::from_millis(250));
        let json = serde_json::to_string(&config).unwrap();
        let back: MemoryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
