//! Durable keyed storage for game sessions.
//!
//! The store is the only layer allowed to block or suspend; everything above
//! it is pure. Saves are atomic full replacements guarded by an optimistic
//! version check, never field-level partial writes.

pub mod memory;
pub mod session;

use async_trait::async_trait;

use crate::errors::domain::DomainError;
pub use memory::InMemorySessionStore;
pub use session::{SessionId, SessionRecord, UNDO_HISTORY_LIMIT};

/// Keyed session storage with atomic read-modify-write semantics.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the latest record for a session, if any.
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, DomainError>;

    /// Atomically replace a session's record.
    ///
    /// With `expected_version: Some(v)` the save succeeds only if the stored
    /// state's version is still `v` (compare-and-swap); a mismatch fails with
    /// `ConflictKind::OptimisticLock` and leaves the stored record unchanged.
    /// `None` replaces unconditionally (the new-game path).
    async fn save(
        &self,
        id: &SessionId,
        expected_version: Option<i32>,
        record: SessionRecord,
    ) -> Result<(), DomainError>;
}
