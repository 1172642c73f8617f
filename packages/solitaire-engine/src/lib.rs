#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Server-authoritative Klondike solitaire engine.
//!
//! All game state lives behind [`GameService`]; callers submit move intents
//! keyed by session and last-known version, and receive either a fresh
//! [`GameStateView`] or a typed rejection. The deck, the deal, and every rule
//! check are server-side only.

pub mod domain;
pub mod errors;
pub mod services;
pub mod store;


// Re-exports for public API
pub use domain::cards::{Card, Color, Rank, Suit};
pub use domain::moves::Move;
pub use domain::snapshot::{snapshot, GameStateView};
pub use domain::state::{GameState, GameStatus};
pub use errors::domain::DomainError;
pub use errors::error_code::ErrorCode;
pub use errors::rejection::Rejection;
pub use services::GameService;
pub use store::{InMemorySessionStore, SessionId, SessionRecord, SessionStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
