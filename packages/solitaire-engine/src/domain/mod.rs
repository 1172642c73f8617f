//! Domain layer: pure game logic, no sessions, no I/O.

pub mod cards;
pub mod deck;
pub mod fixtures;
pub mod moves;
pub mod pile;
pub mod rules;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_recycle;
#[cfg(test)]
mod tests_rules;

// Re-exports for ergonomics
pub use cards::{Card, Color, Rank, Suit};
pub use moves::Move;
pub use pile::{Pile, PileRole};
pub use snapshot::{snapshot, GameStateView};
pub use state::{GameState, GameStatus};
