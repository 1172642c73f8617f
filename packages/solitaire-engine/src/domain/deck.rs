//! Canonical deck construction and seeded shuffling.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::cards::{Card, Rank, Suit};

pub const DECK_SIZE: usize = 52;

/// The canonical 52-card deck: every identity exactly once, all face-down,
/// suit-major order (C, D, H, S).
///
/// Only the new-game deal may turn this into live game state; nothing else in
/// the engine constructs cards.
pub fn canonical() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::face_down(suit, rank));
        }
    }
    deck
}

/// Uniform Fisher-Yates shuffle with an injectable randomness source.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Canonical deck shuffled by a ChaCha stream seeded from `seed`, so deals
/// are reproducible across runs and platforms.
pub fn shuffled_with_seed(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = canonical();
    shuffle(&mut deck, &mut rng);
    deck
}
