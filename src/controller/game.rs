//! The game controller.
//!
//! Owns the current round and the injected collaborators, and is the only
//! thing that mutates the round. All transitions run synchronously inside
//! `start`, `attempt_flip`, `reset` and `fire`; the pacing delays are
//! scheduled tasks, never sleeps.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::cards::CardPosition;
use crate::core::config::{ConfigError, MemoryConfig};
use crate::core::rng::RandomSource;
use crate::events::{EventSink, GameEvent};
use crate::round::{FlipOutcome, FlipRejection, Resolution, Round, RoundId, RoundPhase};
use crate::timing::{ManualClock, ScheduledTask, Scheduler};

/// Where the controller is, outside any single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerPhase {
    /// Waiting for `start()`.
    Splash,
    /// Started; the reveal task has not run yet.
    Revealing,
    /// A round has been dealt.
    InRound,
}

/// Drives a memory game against injected collaborators.
///
/// - `R`: random source used by every deal
/// - `S`: timer service for the pacing delays
/// - `E`: receiver of state-change events
///
/// ## Example
///
/// ```
/// use memory_match::{
///     CardPosition, GameController, GameEvent, IdentityShuffle, ManualClock, MemoryConfig,
/// };
///
/// let mut game = GameController::new(
///     MemoryConfig::instant(),
///     IdentityShuffle,
///     ManualClock::new(),
///     Vec::<GameEvent>::new(),
/// )
/// .unwrap();
///
/// game.start();
/// game.settle();
///
/// // Unshuffled, positions 0 and 1 hold the same symbol.
/// game.attempt_flip(CardPosition::new(0));
/// game.attempt_flip(CardPosition::new(1));
/// game.settle();
///
/// assert_eq!(game.matched_pairs(), 1);
/// assert_eq!(game.attempts(), 1);
/// ```
#[derive(Debug)]
pub struct GameController<R, S, E> {
    config: MemoryConfig,
    rng: R,
    scheduler: S,
    sink: E,
    phase: ControllerPhase,
    round: Option<Round>,
    next_round: RoundId,
}

impl<R, S, E> GameController<R, S, E>
where
    R: RandomSource,
    S: Scheduler,
    E: EventSink,
{
    /// Build a controller in the splash phase.
    ///
    /// Fails only if the configuration cannot be dealt.
    pub fn new(config: MemoryConfig, rng: R, scheduler: S, sink: E) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            rng,
            scheduler,
            sink,
            phase: ControllerPhase::Splash,
            round: None,
            next_round: RoundId::new(1),
        })
    }

    /// Leave the splash screen. The board is dealt after the reveal delay.
    ///
    /// Ignored unless the controller is still on the splash screen.
    pub fn start(&mut self) {
        if self.phase != ControllerPhase::Splash {
            debug!(phase = ?self.phase, "start ignored");
            return;
        }

        self.phase = ControllerPhase::Revealing;
        self.sink.emit(GameEvent::GameStarted);
        self.scheduler
            .schedule(self.config.reveal_delay, ScheduledTask::Reveal);
    }

    /// Replace the current round with a freshly shuffled one.
    ///
    /// Allowed from any phase. From the splash screen or during the reveal
    /// delay the board is shown first; the pending reveal then does nothing.
    /// Counters, the busy flag and any win state go with the old round.
    /// Tasks still scheduled for the old round become no-ops.
    pub fn deal(&mut self) {
        let id = self.next_round;
        let round = match Round::deal(id, &self.config.symbols, &mut self.rng) {
            Ok(round) => round,
            Err(err) => {
                error!(round = %id, %err, "deal rejected");
                return;
            }
        };
        self.next_round = id.next();

        match self.phase {
            ControllerPhase::Splash => {
                self.sink.emit(GameEvent::GameStarted);
                self.sink.emit(GameEvent::BoardShown);
            }
            ControllerPhase::Revealing => self.sink.emit(GameEvent::BoardShown),
            ControllerPhase::InRound => {}
        }

        self.sink.emit(GameEvent::BoardCleared);
        self.sink.emit(GameEvent::AttemptsChanged { attempts: 0 });
        self.sink.emit(GameEvent::CelebrationCleared);
        for card in round.cards() {
            self.sink.emit(GameEvent::CardDealt {
                position: card.position,
                symbol: card.symbol,
            });
        }

        info!(round = %id, cards = round.card_count(), "round dealt");
        self.round = Some(round);
        self.phase = ControllerPhase::InRound;
    }

    /// Start over with a new deal, from any phase. Leaves a won round.
    ///
    /// From the splash screen this skips the reveal delay.
    pub fn reset(&mut self) {
        self.deal();
    }

    /// The player tried to turn over the card at `position`.
    ///
    /// Invalid attempts are silent no-ops; the returned outcome says what
    /// happened for hosts that care. Completing a pair schedules the
    /// comparison after the resolve delay.
    pub fn attempt_flip(&mut self, position: CardPosition) -> FlipOutcome {
        let Some(round) = self.round.as_mut() else {
            return FlipOutcome::Ignored(FlipRejection::NoRound);
        };

        let outcome = round.try_flip(position);
        let id = round.id();
        let attempts = round.attempts();
        let symbol = round.card(position).map(|c| c.symbol);

        match outcome {
            FlipOutcome::Ignored(reason) => {
                debug!(round = %id, %position, ?reason, "flip ignored");
            }
            FlipOutcome::Flipped(position) => {
                if let Some(symbol) = symbol {
                    self.sink.emit(GameEvent::CardFlipped { position, symbol });
                }
            }
            FlipOutcome::PairSelected { first, second } => {
                if let Some(symbol) = symbol {
                    self.sink.emit(GameEvent::CardFlipped {
                        position: second,
                        symbol,
                    });
                }
                self.sink.emit(GameEvent::AttemptsChanged { attempts });
                debug!(round = %id, %first, %second, attempts, "pair selected");
                self.scheduler.schedule(
                    self.config.resolve_delay,
                    ScheduledTask::Resolve {
                        round: id,
                        first,
                        second,
                    },
                );
            }
        }

        outcome
    }

    /// Run a task whose delay has elapsed.
    ///
    /// Tasks for a round that has since been replaced are dropped.
    pub fn fire(&mut self, task: ScheduledTask) {
        if let Some(task_round) = task.round() {
            if self.round.as_ref().map(Round::id) != Some(task_round) {
                debug!(?task, "stale task dropped");
                return;
            }
        }

        match task {
            ScheduledTask::Reveal => {
                if self.phase != ControllerPhase::Revealing {
                    debug!(phase = ?self.phase, "stale reveal dropped");
                    return;
                }
                self.deal();
            }
            ScheduledTask::Resolve { first, second, .. } => self.resolve(first, second),
            ScheduledTask::EndShake { first, second, .. } => {
                self.sink.emit(GameEvent::ShakeEnded { first, second });
            }
        }
    }

    fn resolve(&mut self, first: CardPosition, second: CardPosition) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let id = round.id();
        let Some(resolution) = round.resolve(first, second) else {
            debug!(round = %id, %first, %second, "resolve without matching selection");
            return;
        };
        let attempts = round.attempts();
        let matched = round.matched_pairs();

        match resolution {
            Resolution::Match { won, symbol, .. } => {
                debug!(round = %id, %symbol, matched, "pair matched");
                self.sink.emit(GameEvent::CardsMatched { first, second });
                if won {
                    info!(round = %id, attempts, "round won");
                    self.sink.emit(GameEvent::RoundWon { attempts });
                }
            }
            Resolution::Mismatch { .. } => {
                debug!(round = %id, %first, %second, "pair mismatched");
                self.sink.emit(GameEvent::CardsMismatched { first, second });
                self.scheduler.schedule(
                    self.config.shake_duration,
                    ScheduledTask::EndShake {
                        round: id,
                        first,
                        second,
                    },
                );
            }
        }
    }
}

impl<R, S, E> GameController<R, S, E> {
    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Controller phase.
    #[must_use]
    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    /// Phase of the current round, if one is dealt.
    #[must_use]
    pub fn round_phase(&self) -> Option<RoundPhase> {
        self.round.as_ref().map(Round::phase)
    }

    /// The current round, if one is dealt.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// A comparison is pending; flips are ignored.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.round.as_ref().is_some_and(Round::is_busy)
    }

    /// The current round has been won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.round.as_ref().is_some_and(Round::is_won)
    }

    /// Attempts in the current round (0 before the first deal).
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.round.as_ref().map_or(0, Round::attempts)
    }

    /// Pairs matched in the current round (0 before the first deal).
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.round.as_ref().map_or(0, Round::matched_pairs)
    }

    /// The random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The event sink.
    pub fn sink(&self) -> &E {
        &self.sink
    }

    /// The event sink, mutably.
    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }
}

impl<R, E> GameController<R, ManualClock, E>
where
    R: RandomSource,
    E: EventSink,
{
    /// Move virtual time forward, running every task that falls due.
    ///
    /// Tasks scheduled while running are included if they fall due in the
    /// same window.
    pub fn advance(&mut self, by: std::time::Duration) {
        let deadline = self.scheduler.now() + by;
        while let Some(task) = self.scheduler.pop_due(deadline) {
            self.fire(task);
        }
        self.scheduler.advance_to(deadline);
    }

    /// Run scheduled tasks until none are left.
    pub fn settle(&mut self) {
        while let Some(due) = self.scheduler.next_due() {
            if let Some(task) = self.scheduler.pop_due(due) {
                self.fire(task);
            }
        }
    }
}
