//! Public snapshot API for observing game state without exposing internals.
//!
//! `GameStateView` is the only channel through which a caller learns game
//! state. Callers never construct decks or deals themselves; they render this
//! view and submit move intents.

use serde::{Deserialize, Serialize};

use crate::domain::cards::Card;
use crate::domain::state::{GameState, GameStatus, FOUNDATION_COUNT, TABLEAU_COLUMNS};

/// Client-facing serialization of the full table. Each pile is an ordered
/// list of `{suit, rank, faceUp}`, bottom first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    /// Foundations in suit order C, D, H, S.
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub tableau: [Vec<Card>; TABLEAU_COLUMNS],
    pub move_count: u32,
    pub score: i32,
    pub status: GameStatus,
    pub version: i32,
}

/// Entry point: produce a view of the current game state.
pub fn snapshot(state: &GameState) -> GameStateView {
    GameStateView {
        stock: state.stock.cards().to_vec(),
        waste: state.waste.cards().to_vec(),
        foundations: std::array::from_fn(|i| state.foundations[i].cards().to_vec()),
        tableau: std::array::from_fn(|i| state.tableau[i].cards().to_vec()),
        move_count: state.move_count,
        score: state.score,
        status: state.status,
        version: state.version,
    }
}
