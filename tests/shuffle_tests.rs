//! Deal and shuffle tests.
//!
//! These tests check the deck properties every deal must have:
//! - 2N cards, each symbol exactly twice
//! - Fisher–Yates produces every permutation with equal frequency
//! - Each symbol lands in each position about equally often

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memory_match::cards::deck;
use memory_match::{GameRng, MemoryConfig, Round, RoundId, Symbol};

fn classic_symbols() -> Vec<Symbol> {
    MemoryConfig::new().symbols
}

/// Every position holds every symbol about 1/8 of the time.
#[test]
fn test_position_symbol_frequencies() {
    const TRIALS: usize = 8_000;
    let symbols = classic_symbols();
    let mut rng = GameRng::new(2024);
    let mut counts: FxHashMap<(usize, Symbol), usize> = FxHashMap::default();

    for _ in 0..TRIALS {
        let deck = deck::shuffled(&symbols, &mut rng);
        for (position, &symbol) in deck.iter().enumerate() {
            *counts.entry((position, symbol)).or_insert(0) += 1;
        }
    }

    // Two copies of each of eight symbols: 1/8 per cell
    let expected = TRIALS / 8;
    let tolerance = expected * 15 / 100;
    assert_eq!(counts.len(), 16 * 8);
    for (&(position, symbol), &count) in &counts {
        assert!(
            count.abs_diff(expected) <= tolerance,
            "symbol {} at position {} seen {} times, expected about {}",
            symbol,
            position,
            count,
            expected
        );
    }
}

/// All 24 orderings of four distinct items appear equally often.
#[test]
fn test_permutations_uniform() {
    const TRIALS: usize = 24_000;
    let mut rng = GameRng::new(7);
    let mut counts: FxHashMap<[u8; 4], usize> = FxHashMap::default();

    for _ in 0..TRIALS {
        let mut items = [0u8, 1, 2, 3];
        deck::shuffle(&mut items[..], &mut rng);
        *counts.entry(items).or_insert(0) += 1;
    }

    let expected = TRIALS / 24;
    let tolerance = expected * 15 / 100;
    assert_eq!(counts.len(), 24);
    for (perm, &count) in &counts {
        assert!(
            count.abs_diff(expected) <= tolerance,
            "permutation {:?} seen {} times, expected about {}",
            perm,
            count,
            expected
        );
    }
}

proptest! {
    /// Every deal is a full, paired deck.
    #[test]
    fn prop_deal_is_paired(seed in any::<u64>()) {
        let symbols = classic_symbols();
        let round = Round::deal(RoundId::new(1), &symbols, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(round.card_count(), 16);
        prop_assert_eq!(round.total_pairs(), 8);
        let counts = deck::symbol_counts(&round.symbols());
        prop_assert_eq!(counts.len(), 8);
        for symbol in &symbols {
            prop_assert_eq!(counts.get(symbol).copied(), Some(2));
        }
        for (i, card) in round.cards().enumerate() {
            prop_assert_eq!(card.position.index(), i);
            prop_assert!(card.is_face_down());
        }
    }

    /// Shuffling never adds, drops or changes items.
    #[test]
    fn prop_shuffle_is_permutation(
        seed in any::<u64>(),
        mut items in proptest::collection::vec(any::<u32>(), 0..64),
    ) {
        let mut shuffled = items.clone();
        deck::shuffle(&mut shuffled, &mut GameRng::new(seed));

        items.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(items, shuffled);
    }

    /// Any distinct symbol set deals as pairs.
    #[test]
    fn prop_any_symbol_set_pairs(
        seed in any::<u64>(),
        glyphs in proptest::collection::btree_set(proptest::char::range('a', 'z'), 1..26),
    ) {
        let symbols: Vec<Symbol> = glyphs.into_iter().map(Symbol::new).collect();
        let deck = deck::shuffled(&symbols, &mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), symbols.len() * 2);
        prop_assert!(deck::is_paired(&deck));
    }
}
