//! Domain-level error types.

use thiserror::Error;

/// Storage backend errors.
///
/// Plain absence is not an error at the repository surface - lookups return
/// `Option` and deletes return `bool`. `NotFound` exists for the
/// whole-record `update` path, where writing a missing id is a failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage connection failed: {0}")]
    Connection(String),

    #[error("storage query failed: {0}")]
    Query(String),

    #[error("storage I/O failed: {0}")]
    Io(String),

    #[error("stored data could not be decoded: {0}")]
    Serialization(String),

    #[error("record not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    Constraint(String),
}

/// Business-logic failures surfaced to the caller.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("email already registered: {0}")]
    EmailTaken(String),

    #[error("invalid credentials")]
    AuthFailed,

    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
