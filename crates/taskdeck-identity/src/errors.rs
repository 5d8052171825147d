//! Identity error types.

use thiserror::Error;
use uuid::Uuid;

/// Identity subsystem errors
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Malformed or missing required input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Username already registered
    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    /// Identity not found
    #[error("Identity not found: {0}")]
    NotFound(Uuid),

    /// Bad token, unknown username, or wrong password
    ///
    /// Deliberately carries no detail: callers must not learn whether the
    /// username or the password was the wrong half.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password hashing error
    #[error("Password hashing error: {0}")]
    Hash(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] taskdeck_storage::StorageError),
}

/// Result type for identity operations
pub type Result<T> = std::result::Result<T, IdentityError>;
