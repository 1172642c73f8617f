//! Domain-level error type used across the rules engine, store, and service.
//!
//! This error type is transport- and storage-agnostic. Callers embedding the
//! engine behind HTTP (or any other boundary) should convert it into their own
//! response type via [`crate::errors::ErrorCode`] and
//! [`crate::errors::Rejection`].

use thiserror::Error;

/// Rule violations that reject a move. State is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Destination pile refuses the card or run.
    IllegalDestination,
    /// Source pile has no card to move.
    EmptySource,
    /// The game is already won; no further moves are accepted.
    GameAlreadyWon,
    /// Tableau column index outside 0..7.
    UnknownColumn,
    /// A card in the requested run is face-down.
    FaceDownRun,
    /// The requested run is not a contiguous alternating-descending sequence.
    InvalidRun,
    /// Stock and waste are both empty.
    NoCardsToDraw,
    /// No exposed card can legally move to a foundation.
    NoAutoMove,
    /// Undo requested with no prior snapshot.
    NoUndoHistory,
    /// Card token failed to parse.
    ParseCard,
    Other(String),
}

/// Semantic conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    OptimisticLock,
    Other(String),
}

/// Missing resources in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Other(String),
}

/// Infra error kinds to distinguish operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    StorageUnavailable,
    DataCorruption,
    Other(String),
}

/// Central domain error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or move-legality violation.
    #[error("validation {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict.
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms.
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures.
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other("VALIDATION_ERROR".into()), detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// True for rejections a caller can fix by choosing another move.
    pub fn is_rejection(&self) -> bool {
        matches!(self, DomainError::Validation(_, _))
    }
}
