//! Client-facing rejection payload.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;
use crate::errors::error_code::ErrorCode;

/// Structured rejection returned to callers instead of a new state.
///
/// `code` is a canonical string from [`ErrorCode`]; `detail` is a
/// human-readable explanation. Rejections never carry partial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub code: String,
    pub detail: String,
}

impl From<&DomainError> for Rejection {
    fn from(err: &DomainError) -> Self {
        let code = ErrorCode::from(err);
        Self {
            code: code.as_str().to_string(),
            detail: err.to_string(),
        }
    }
}
