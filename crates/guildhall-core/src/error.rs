//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A character referenced a guild id that is not in the roster.
    #[error("guild not found")]
    GuildNotFound(i64),

    /// A validation error in request or domain data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure error (poisoned lock, report writer failure).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
