//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is an expected, recoverable outcome of a command (bad input,
/// missing record, duplicate). Callers that only care about success can
/// collapse a `DomainResult` with `is_ok()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A product code was absent, blank or otherwise unusable.
    #[error("invalid product code: {0}")]
    InvalidCode(String),

    /// The requested product does not exist.
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. duplicate product code).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_code(msg: impl Into<String>) -> Self {
        Self::InvalidCode(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
