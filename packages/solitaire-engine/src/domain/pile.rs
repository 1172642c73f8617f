//! Piles: ordered card sequences with a role and per-role append legality.

use serde::{Deserialize, Serialize};

use crate::domain::cards::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// The role a pile plays on the table. Role decides which appends are legal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PileRole {
    Stock,
    Waste,
    Foundation(Suit),
    Tableau(u8),
}

/// An ordered sequence of cards. Index 0 is the bottom; the last element is
/// the exposed top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    role: PileRole,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(role: PileRole) -> Self {
        Self {
            role,
            cards: Vec::new(),
        }
    }

    pub fn with_cards(role: PileRole, cards: Vec<Card>) -> Self {
        Self { role, cards }
    }

    pub fn role(&self) -> PileRole {
        self.role
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Append a run on top, preserving its order.
    pub fn append_run(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// Remove and return the cards from `index` to the top, preserving order.
    /// Callers validate `index`; out of range returns an empty vec.
    pub fn take_from(&mut self, index: usize) -> Vec<Card> {
        if index >= self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(index)
    }

    /// Remove and return every card, bottom to top.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Flip the top card face-up if it is face-down. Returns whether a flip
    /// happened (used for scoring).
    pub fn flip_top_up(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.face_up => {
                *card = card.flipped_up();
                true
            }
            _ => false,
        }
    }

    /// Whether this pile's role accepts `run` on its current top.
    ///
    /// Checks only the destination constraint; the internal shape of a
    /// tableau run is validated separately via [`is_valid_run`].
    pub fn can_accept(&self, run: &[Card]) -> Result<(), DomainError> {
        let Some(head) = run.first() else {
            return Err(DomainError::validation(
                ValidationKind::EmptySource,
                "no cards to place",
            ));
        };

        match self.role {
            PileRole::Stock | PileRole::Waste => Err(DomainError::validation(
                ValidationKind::IllegalDestination,
                "cards cannot be placed onto stock or waste",
            )),
            PileRole::Foundation(suit) => {
                if run.len() != 1 {
                    return Err(DomainError::validation(
                        ValidationKind::IllegalDestination,
                        "foundations accept one card at a time",
                    ));
                }
                if head.suit != suit {
                    return Err(DomainError::validation(
                        ValidationKind::IllegalDestination,
                        format!("card {head} does not belong on the {suit:?} foundation"),
                    ));
                }
                let expected = match self.top() {
                    None => Rank::Ace,
                    Some(top) => match Rank::from_value(top.rank.value() + 1) {
                        Some(next) => next,
                        None => {
                            return Err(DomainError::validation(
                                ValidationKind::IllegalDestination,
                                "foundation is already complete",
                            ))
                        }
                    },
                };
                if head.rank != expected {
                    return Err(DomainError::validation(
                        ValidationKind::IllegalDestination,
                        format!("foundation expects rank {}, got {head}", expected.value()),
                    ));
                }
                Ok(())
            }
            PileRole::Tableau(_) => match self.top() {
                None => {
                    if head.rank == Rank::King {
                        Ok(())
                    } else {
                        Err(DomainError::validation(
                            ValidationKind::IllegalDestination,
                            "only a King may be placed on an empty column",
                        ))
                    }
                }
                Some(top) => {
                    if !top.face_up {
                        return Err(DomainError::validation(
                            ValidationKind::IllegalDestination,
                            "cannot build on a face-down card",
                        ));
                    }
                    if !head.rank.is_one_below(top.rank) || head.color() == top.color() {
                        return Err(DomainError::validation(
                            ValidationKind::IllegalDestination,
                            format!("{head} does not continue {top}"),
                        ));
                    }
                    Ok(())
                }
            },
        }
    }
}

/// A movable tableau run: non-empty, every card face-up, strictly descending
/// by one with alternating colors.
pub fn is_valid_run(run: &[Card]) -> bool {
    let Some(first) = run.first() else {
        return false;
    };
    if !first.face_up {
        return false;
    }
    run.windows(2).all(|pair| {
        let (upper, lower) = (pair[0], pair[1]);
        lower.face_up && lower.rank.is_one_below(upper.rank) && lower.color() != upper.color()
    })
}
