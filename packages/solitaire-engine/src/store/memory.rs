//! In-memory session store backed by a concurrent map.
//!
//! Sessions are fully independent; the map shards give cross-session
//! concurrency while the entry guard makes each compare-and-swap atomic.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::store::session::{SessionId, SessionRecord};
use crate::store::SessionStore;

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, SessionRecord>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, DomainError> {
        Ok(self.sessions.get(id).map(|r| r.clone()))
    }

    async fn save(
        &self,
        id: &SessionId,
        expected_version: Option<i32>,
        record: SessionRecord,
    ) -> Result<(), DomainError> {
        let Some(expected) = expected_version else {
            self.sessions.insert(id.clone(), record);
            return Ok(());
        };

        // The entry guard holds the shard lock across check and swap.
        match self.sessions.entry(id.clone()) {
            Entry::Occupied(mut entry) => {
                let stored = entry.get().state.version;
                if stored != expected {
                    return Err(DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        format!("session {id}: expected version {expected}, stored {stored}"),
                    ));
                }
                entry.insert(record);
                Ok(())
            }
            Entry::Vacant(_) => Err(DomainError::not_found(
                NotFoundKind::Session,
                format!("session {id} does not exist"),
            )),
        }
    }
}
