use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;
use taskdeck_identity::{Identity, IdentityDirectory};

use crate::{error::ApiError, state::AppState};

/// Extractor for authenticated requests
///
/// Resolves the `Authorization: Bearer <token>` header to a full identity
/// through the identity service. Handlers receiving this extractor can
/// trust `identity` as the caller for all owner-scoped operations.
pub struct AuthenticatedCaller {
    pub identity: Identity,
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthenticatedCaller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;

        // Bad tokens become 401 through the usual error mapping; a storage
        // failure during lookup stays a 500 rather than telling the client
        // its valid token is bad.
        let identity = state
            .identity_service
            .authenticate(token)
            .await
            .map_err(|e| {
                tracing::warn!("Token authentication failed: {}", e);
                ApiError::from(e)
            })?;

        Ok(AuthenticatedCaller { identity })
    }
}
