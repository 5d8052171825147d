//! Task subsystem error types.

use thiserror::Error;
use uuid::Uuid;

/// Task subsystem errors
#[derive(Debug, Error)]
pub enum TaskError {
    /// Malformed or missing required input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Task absent, or present but owned by someone else
    ///
    /// The two cases surface identically so callers cannot probe for the
    /// existence of other owners' tasks.
    #[error("Task not found: {0}")]
    NotFound(Uuid),

    /// Identity error (profile aggregation)
    #[error("Identity error: {0}")]
    Identity(#[from] taskdeck_identity::IdentityError),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] taskdeck_storage::StorageError),
}

/// Result type for task operations
pub type Result<T> = std::result::Result<T, TaskError>;
