pub mod domain;
pub mod error_code;
pub mod rejection;


pub use domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
pub use error_code::ErrorCode;
pub use rejection::Rejection;
