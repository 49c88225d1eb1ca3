//! Deck construction and shuffling.
//!
//! A deck is a plain sequence of symbols; position `i` of the sequence is
//! dealt to board slot `i`.

use rustc_hash::FxHashMap;

use super::card::Symbol;
use crate::core::rng::RandomSource;

/// Build the unshuffled deck: two copies of each symbol, side by side.
///
/// `[A, B]` becomes `[A, A, B, B]`.
#[must_use]
pub fn paired(symbols: &[Symbol]) -> Vec<Symbol> {
    symbols.iter().flat_map(|&s| [s, s]).collect()
}

/// Shuffle in place with Fisher–Yates.
///
/// Walks from the last index down to 1, swapping each slot with a uniform
/// pick from `0..=i`. Every permutation is equally likely provided the
/// random source is uniform.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index_at_most(i);
        items.swap(i, j);
    }
}

/// Build and shuffle a deck in one step.
#[must_use]
pub fn shuffled<R: RandomSource + ?Sized>(symbols: &[Symbol], rng: &mut R) -> Vec<Symbol> {
    let mut deck = paired(symbols);
    shuffle(&mut deck, rng);
    deck
}

/// Count how many cards carry each symbol.
#[must_use]
pub fn symbol_counts(deck: &[Symbol]) -> FxHashMap<Symbol, usize> {
    let mut counts = FxHashMap::default();
    for &symbol in deck {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    counts
}

/// Does every symbol in the deck appear exactly twice?
#[must_use]
pub fn is_paired(deck: &[Symbol]) -> bool {
    deck.len() % 2 == 0 && symbol_counts(deck).values().all(|&n| n == 2)
}
