use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use taskdeck_tasks::Profiles;

use crate::{
    api::helpers::format_timestamp_rfc3339, error::ApiError, extractors::AuthenticatedCaller,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
    pub created_at: String,
    pub task_count: usize,
    pub completed_tasks: usize,
    pub completion_rate: f64,
}

/// GET /user/profile
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    caller: AuthenticatedCaller,
) -> Result<Json<ProfileResponse>, ApiError> {
    let summary = state
        .profile_service
        .get_profile(caller.identity.identity_id)
        .await?;

    Ok(Json(ProfileResponse {
        username: summary.username,
        email: summary.email,
        created_at: format_timestamp_rfc3339(summary.created_at)?,
        task_count: summary.task_count,
        completed_tasks: summary.completed_tasks,
        completion_rate: summary.completion_rate,
    }))
}
