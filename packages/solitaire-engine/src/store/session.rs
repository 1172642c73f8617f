//! Session records: the persisted unit of game state plus undo history.

use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::state::GameState;

/// Prior snapshots retained per session for undo. Oldest are evicted.
pub const UNDO_HISTORY_LIMIT: usize = 10;

/// Opaque session key chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One record per session: current state, bounded undo history, timestamp.
/// Mutated only by full replacement through [`super::SessionStore::save`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub state: GameState,
    /// Prior snapshots, oldest first. Bounded by [`UNDO_HISTORY_LIMIT`];
    /// discarded on new game.
    pub history: VecDeque<GameState>,
    pub updated_at: time::OffsetDateTime,
}

impl SessionRecord {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            history: VecDeque::new(),
            updated_at: time::OffsetDateTime::now_utc(),
        }
    }

    /// Push a prior snapshot, evicting the oldest beyond the bound.
    pub fn push_history(&mut self, prior: GameState) {
        if self.history.len() == UNDO_HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(prior);
    }

    /// Take the most recent snapshot, if any.
    pub fn pop_history(&mut self) -> Option<GameState> {
        self.history.pop_back()
    }

    pub fn touch(&mut self) {
        self.updated_at = time::OffsetDateTime::now_utc();
    }
}
