use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use taskdeck_identity::IdentityError;
use taskdeck_tasks::TaskError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Missing or invalid credentials".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
                details: None,
            },
        });

        (status, body).into_response()
    }
}

impl From<IdentityError> for ApiError {
    fn from(error: IdentityError) -> Self {
        match error {
            IdentityError::Validation(msg) => ApiError::InvalidRequest(msg),
            // Duplicate usernames are a validation failure per the
            // registration contract, not a 409.
            IdentityError::UsernameTaken(username) => {
                ApiError::InvalidRequest(format!("username already taken: {username}"))
            }
            IdentityError::NotFound(id) => ApiError::NotFound(format!("identity {id}")),
            IdentityError::InvalidCredentials => ApiError::Unauthorized,
            IdentityError::Hash(msg) => ApiError::Internal(anyhow::anyhow!(msg)),
            IdentityError::Storage(e) => ApiError::Internal(e.into()),
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(error: TaskError) -> Self {
        match error {
            TaskError::Validation(msg) => ApiError::InvalidRequest(msg),
            TaskError::NotFound(id) => ApiError::NotFound(format!("task {id}")),
            TaskError::Identity(e) => e.into(),
            TaskError::Storage(e) => ApiError::Internal(e.into()),
        }
    }
}
