//! Session-aware game orchestration.
//!
//! The service treats load → validate → apply → save as one critical section
//! per session: the caller's `expected_version` is checked against the loaded
//! record, and the save is a compare-and-swap on the same version, so an
//! interleaved writer forces a clean retry instead of a silent overwrite.
//! Callers only ever submit move intents; full-state payloads do not exist in
//! this API, which is what makes client-side state regeneration impossible.

use tracing::{debug, info, instrument};

use crate::domain::moves::Move;
use crate::domain::rules;
use crate::domain::snapshot::{snapshot, GameStateView};
use crate::domain::state::{GameState, GameStatus};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::store::{SessionId, SessionRecord, SessionStore};

pub struct GameService<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> GameService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Start a fresh game for this session, discarding any prior record and
    /// its undo history.
    #[instrument(skip(self), fields(session = %session_id))]
    pub async fn new_game(&self, session_id: &SessionId) -> Result<GameStateView, DomainError> {
        let seed = rand::random::<u64>();
        self.new_game_with_seed(session_id, seed).await
    }

    /// Seeded variant for reproducible deals.
    #[instrument(skip(self), fields(session = %session_id))]
    pub async fn new_game_with_seed(
        &self,
        session_id: &SessionId,
        seed: u64,
    ) -> Result<GameStateView, DomainError> {
        let record = SessionRecord::new(GameState::deal(seed));
        let view = snapshot(&record.state);
        self.store.save(session_id, None, record).await?;
        info!(seed, "dealt new game");
        Ok(view)
    }

    /// Validate and apply a move intent against the stored state.
    ///
    /// `expected_version` is the client's last-known version; a mismatch is
    /// an optimistic-lock conflict and the caller must reload and retry.
    #[instrument(skip(self), fields(session = %session_id))]
    pub async fn apply_move(
        &self,
        session_id: &SessionId,
        mv: Move,
        expected_version: i32,
    ) -> Result<GameStateView, DomainError> {
        let mut record = self.require_record(session_id).await?;
        let stored_version = record.state.version;
        if stored_version != expected_version {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "session {session_id}: expected version {expected_version}, stored {stored_version}"
                ),
            ));
        }

        let next = match mv {
            Move::Undo => self.resolve_undo(&mut record, stored_version)?,
            _ => match rules::apply(&record.state, mv) {
                Ok(next) => {
                    record.push_history(record.state.clone());
                    next
                }
                Err(err) => {
                    debug!(error = %err, "move rejected");
                    return Err(err);
                }
            },
        };

        record.state = next;
        record.touch();
        let view = snapshot(&record.state);
        // A failed save discards the candidate; the stored record stays the
        // last known-good version.
        self.store
            .save(session_id, Some(stored_version), record)
            .await?;

        debug!(
            version = view.version,
            move_count = view.move_count,
            "move accepted"
        );
        Ok(view)
    }

    /// Read-only view of the current state.
    #[instrument(skip(self), fields(session = %session_id))]
    pub async fn get_state(&self, session_id: &SessionId) -> Result<GameStateView, DomainError> {
        let record = self.require_record(session_id).await?;
        Ok(snapshot(&record.state))
    }

    async fn require_record(&self, session_id: &SessionId) -> Result<SessionRecord, DomainError> {
        self.store.load(session_id).await?.ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Session,
                format!("session {session_id} has no game; start one with new_game"),
            )
        })
    }

    /// Undo restores the latest snapshot while keeping `version` monotonic,
    /// so conflict detection keeps working across undos.
    fn resolve_undo(
        &self,
        record: &mut SessionRecord,
        stored_version: i32,
    ) -> Result<GameState, DomainError> {
        if record.state.status == GameStatus::Won {
            return Err(DomainError::validation(
                ValidationKind::GameAlreadyWon,
                "the game is already won",
            ));
        }
        let mut prior = record.pop_history().ok_or_else(|| {
            DomainError::validation(ValidationKind::NoUndoHistory, "nothing to undo")
        })?;
        prior.version = stored_version + 1;
        Ok(prior)
    }
}
