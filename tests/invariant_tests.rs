//! Round invariant tests under arbitrary play.
//!
//! Random sequences of flips, resets and clock ticks are thrown at a
//! controller; after every step the round invariants must hold.

use std::time::Duration;

use proptest::prelude::*;

use memory_match::{
    CardPosition, FlipOutcome, GameController, GameEvent, GameRng, ManualClock, MemoryConfig,
    Round,
};

#[derive(Clone, Debug)]
enum Step {
    Flip(u16),
    Tick(u64),
    Settle,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (0u16..18).prop_map(Step::Flip),
        2 => (0u64..1500).prop_map(Step::Tick),
        1 => Just(Step::Settle),
    ]
}

fn check_round(round: &Round) -> Result<(), TestCaseError> {
    let face_up = round.face_up_unmatched();
    prop_assert!(face_up <= 2, "{} cards face up and unmatched", face_up);
    prop_assert_eq!(face_up, round.pending().len());
    prop_assert!(round.matched_pairs() <= round.total_pairs());

    let matched_cards = round.cards().filter(|c| c.matched).count();
    prop_assert_eq!(matched_cards, round.matched_pairs() * 2);
    prop_assert!(round.cards().filter(|c| c.matched).all(|c| c.flipped));

    prop_assert_eq!(round.is_won(), round.matched_pairs() == round.total_pairs());
    prop_assert_eq!(round.is_busy(), round.pending().len() == 2);
    Ok(())
}

proptest! {
    /// Arbitrary play never breaks the round invariants.
    #[test]
    fn prop_invariants_hold(seed in any::<u64>(), steps in proptest::collection::vec(step(), 0..200)) {
        let mut game = GameController::new(
            MemoryConfig::new(),
            GameRng::new(seed),
            ManualClock::new(),
            Vec::<GameEvent>::new(),
        )
        .unwrap();
        game.reset();

        let mut pairs_selected = 0u32;
        let mut last_matched = 0usize;

        for step in steps {
            match step {
                Step::Flip(i) => {
                    let before = game.round().cloned();
                    let events_before = game.sink().len();
                    let outcome = game.attempt_flip(CardPosition::new(i));
                    match outcome {
                        FlipOutcome::Ignored(_) => {
                            prop_assert_eq!(game.round().cloned(), before);
                            prop_assert_eq!(game.sink().len(), events_before);
                        }
                        FlipOutcome::PairSelected { .. } => pairs_selected += 1,
                        FlipOutcome::Flipped(_) => {}
                    }
                }
                Step::Tick(ms) => game.advance(Duration::from_millis(ms)),
                Step::Settle => game.settle(),
            }

            let round = game.round().unwrap();
            check_round(round)?;
            prop_assert_eq!(round.attempts(), pairs_selected);
            prop_assert!(round.matched_pairs() >= last_matched);
            last_matched = round.matched_pairs();
        }

        let wins = game
            .sink()
            .iter()
            .filter(|e| matches!(e, GameEvent::RoundWon { .. }))
            .count();
        prop_assert_eq!(wins, usize::from(game.is_won()));
    }

    /// Solving the board with perfect memory always wins in exactly N attempts.
    #[test]
    fn prop_perfect_recall_wins(seed in any::<u64>()) {
        let mut game = GameController::new(
            MemoryConfig::instant(),
            GameRng::new(seed),
            ManualClock::new(),
            Vec::<GameEvent>::new(),
        )
        .unwrap();
        game.start();
        game.settle();

        let symbols = game.round().unwrap().symbols();
        for (i, symbol) in symbols.iter().enumerate() {
            let Some(j) = (i + 1..symbols.len()).find(|&j| symbols[j] == *symbol) else {
                continue;
            };
            game.attempt_flip(CardPosition::new(i as u16));
            game.attempt_flip(CardPosition::new(j as u16));
            game.settle();
        }

        prop_assert!(game.is_won());
        prop_assert_eq!(game.attempts(), 8);
        prop_assert_eq!(game.sink().last(), Some(&GameEvent::RoundWon { attempts: 8 }));
    }
}
