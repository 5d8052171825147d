use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use taskdeck_identity::{AuthGrant, IdentityDirectory, NewIdentity};

use crate::{error::ApiError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub credential: String,
    pub identity_id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<AuthGrant> for AuthResponse {
    fn from(grant: AuthGrant) -> Self {
        AuthResponse {
            credential: grant.token,
            identity_id: grant.identity.identity_id,
            username: grant.identity.username,
            email: grant.identity.email,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let grant = state
        .identity_service
        .register(NewIdentity {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(grant.into())))
}

/// POST /login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let grant = state
        .identity_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(grant.into()))
}
