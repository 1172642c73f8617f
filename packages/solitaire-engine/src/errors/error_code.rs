//! Error codes for the engine API.
//!
//! This module defines all error codes used throughout the engine. Add new
//! codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in client-facing rejections.

use core::fmt;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};

/// Centralized error codes for the engine API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in [`crate::errors::Rejection`] payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Move rejections
    /// Destination pile refuses the card or run
    IllegalDestination,
    /// Source pile has no card to move
    EmptySource,
    /// Game is already won
    GameAlreadyWon,
    /// Tableau column index out of range
    UnknownColumn,
    /// A card in the requested run is face-down
    FaceDownRun,
    /// Run is not alternating-color descending
    InvalidRun,
    /// Stock and waste are both empty
    NoCardsToDraw,
    /// No legal auto-move exists
    NoAutoMove,
    /// No prior snapshot to undo to
    NoUndoHistory,
    /// Card token failed to parse
    ParseCard,
    /// General validation error
    ValidationError,

    // Conflicts
    /// Optimistic lock conflict; reload state and retry
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Resource not found
    /// Session not found; start a new game
    SessionNotFound,
    /// General not found error
    NotFound,

    // System errors
    /// Storage timeout
    StorageTimeout,
    /// Storage unavailable
    StorageUnavailable,
    /// Card multiset inconsistency detected
    DataCorruption,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IllegalDestination => "ILLEGAL_DESTINATION",
            ErrorCode::EmptySource => "EMPTY_SOURCE",
            ErrorCode::GameAlreadyWon => "GAME_ALREADY_WON",
            ErrorCode::UnknownColumn => "UNKNOWN_COLUMN",
            ErrorCode::FaceDownRun => "FACE_DOWN_RUN",
            ErrorCode::InvalidRun => "INVALID_RUN",
            ErrorCode::NoCardsToDraw => "NO_CARDS_TO_DRAW",
            ErrorCode::NoAutoMove => "NO_AUTO_MOVE",
            ErrorCode::NoUndoHistory => "NO_UNDO_HISTORY",
            ErrorCode::ParseCard => "PARSE_CARD",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::OptimisticLock => "OPTIMISTIC_LOCK",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::StorageTimeout => "STORAGE_TIMEOUT",
            ErrorCode::StorageUnavailable => "STORAGE_UNAVAILABLE",
            ErrorCode::DataCorruption => "DATA_CORRUPTION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::IllegalDestination => ErrorCode::IllegalDestination,
                ValidationKind::EmptySource => ErrorCode::EmptySource,
                ValidationKind::GameAlreadyWon => ErrorCode::GameAlreadyWon,
                ValidationKind::UnknownColumn => ErrorCode::UnknownColumn,
                ValidationKind::FaceDownRun => ErrorCode::FaceDownRun,
                ValidationKind::InvalidRun => ErrorCode::InvalidRun,
                ValidationKind::NoCardsToDraw => ErrorCode::NoCardsToDraw,
                ValidationKind::NoAutoMove => ErrorCode::NoAutoMove,
                ValidationKind::NoUndoHistory => ErrorCode::NoUndoHistory,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                _ => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::OptimisticLock => ErrorCode::OptimisticLock,
                _ => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Session => ErrorCode::SessionNotFound,
                _ => ErrorCode::NotFound,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::Timeout => ErrorCode::StorageTimeout,
                InfraErrorKind::StorageUnavailable => ErrorCode::StorageUnavailable,
                InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                _ => ErrorCode::Internal,
            },
        }
    }
}
