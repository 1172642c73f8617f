//! The full table state and the new-game deal.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::cards::{Card, Suit};
use crate::domain::deck::{self, DECK_SIZE};
use crate::domain::pile::{Pile, PileRole};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

pub const TABLEAU_COLUMNS: usize = 7;
pub const FOUNDATION_COUNT: usize = 4;
/// Cards left in stock after dealing seven columns of 1..=7.
pub const STOCK_AFTER_DEAL: usize = 24;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
}

/// Entire table container, sufficient for pure domain operations.
///
/// Invariant: the multiset union of all piles equals the canonical 52-card
/// deck at every observable instant. [`GameState::check_card_conservation`]
/// enforces this at the rules boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub stock: Pile,
    pub waste: Pile,
    /// One per suit, in suit order C, D, H, S.
    pub foundations: [Pile; FOUNDATION_COUNT],
    /// Seven working columns, left to right.
    pub tableau: [Pile; TABLEAU_COLUMNS],
    pub move_count: u32,
    pub score: i32,
    pub status: GameStatus,
    /// Incremented on every accepted mutation; the optimistic-lock handle.
    pub version: i32,
}

impl GameState {
    /// Deal a fresh game from a seeded shuffle: columns sized 1..=7 with only
    /// each column's last card face-up, the remaining 24 cards face-down in
    /// stock, waste and foundations empty.
    pub fn deal(seed: u64) -> Self {
        let mut deck = deck::shuffled_with_seed(seed);

        let mut tableau: [Pile; TABLEAU_COLUMNS] =
            std::array::from_fn(|col| Pile::new(PileRole::Tableau(col as u8)));
        for (col, pile) in tableau.iter_mut().enumerate() {
            for _ in 0..=col {
                // deck is 52 cards and columns take 28; pop cannot fail here
                if let Some(card) = deck.pop() {
                    pile.push(card);
                }
            }
            pile.flip_top_up();
        }

        let stock = Pile::with_cards(PileRole::Stock, deck);

        Self {
            stock,
            waste: Pile::new(PileRole::Waste),
            foundations: std::array::from_fn(|i| Pile::new(PileRole::Foundation(Suit::ALL[i]))),
            tableau,
            move_count: 0,
            score: 0,
            status: GameStatus::Playing,
            version: 0,
        }
    }

    pub fn foundation(&self, suit: Suit) -> &Pile {
        &self.foundations[suit.foundation_index()]
    }

    pub fn foundation_mut(&mut self, suit: Suit) -> &mut Pile {
        &mut self.foundations[suit.foundation_index()]
    }

    pub fn tableau_column(&self, column: usize) -> Result<&Pile, DomainError> {
        self.tableau.get(column).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownColumn,
                format!("tableau column {column} out of range"),
            )
        })
    }

    pub fn tableau_column_mut(&mut self, column: usize) -> Result<&mut Pile, DomainError> {
        self.tableau.get_mut(column).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownColumn,
                format!("tableau column {column} out of range"),
            )
        })
    }

    /// All cards across all piles, in no particular order.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .cards()
            .iter()
            .chain(self.waste.cards())
            .chain(self.foundations.iter().flat_map(|p| p.cards()))
            .chain(self.tableau.iter().flat_map(|p| p.cards()))
    }

    /// Won when all four foundations hold 13 cards.
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == 13)
    }

    /// Verify the 52-unique-cards invariant. Violations are reported as data
    /// corruption; no mutation that breaks this may ever be persisted.
    pub fn check_card_conservation(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut total = 0usize;
        for card in self.all_cards() {
            total += 1;
            if !seen.insert(card.id()) {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("duplicate card on table: {card}"),
                ));
            }
        }
        if total != DECK_SIZE {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("table holds {total} cards, expected {DECK_SIZE}"),
            ));
        }
        Ok(())
    }
}
