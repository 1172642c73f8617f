//! Service layer: the only boundary through which callers touch game state.

pub mod game_service;


pub use game_service::GameService;
