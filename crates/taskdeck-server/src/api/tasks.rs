use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use taskdeck_tasks::{Priority, Task, TaskAccess, TaskDraft, TaskPatch};

use crate::{
    api::helpers::{deserialize_explicit_null, format_timestamp_rfc3339},
    error::ApiError,
    extractors::AuthenticatedCaller,
    state::AppState,
};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Defaults to empty so a missing title surfaces as a validation
    /// error instead of a body-parsing rejection.
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
}

/// Partial update body
///
/// Clearable fields use the explicit-null convention: leaving a key out
/// keeps the stored value, sending `null` clears it.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub due_date: Option<Option<String>>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub priority: Option<Option<Priority>>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
    pub due_date: Option<String>,
    pub completed: bool,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub owner_id: Uuid,
}

impl TaskResponse {
    fn from_task(task: Task) -> Result<Self, ApiError> {
        Ok(TaskResponse {
            id: task.task_id,
            title: task.title,
            description: task.description,
            created_at: format_timestamp_rfc3339(task.created_at)?,
            due_date: task.due_date,
            completed: task.completed,
            category: task.category,
            priority: task.priority,
            owner_id: task.owner_id,
        })
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    caller: AuthenticatedCaller,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state
        .task_service
        .list_tasks(caller.identity.identity_id)
        .await?;

    let responses = tasks
        .into_iter()
        .map(TaskResponse::from_task)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(responses))
}

/// POST /tasks
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    caller: AuthenticatedCaller,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let task = state
        .task_service
        .create_task(
            caller.identity.identity_id,
            TaskDraft {
                title: req.title,
                description: req.description,
                due_date: req.due_date,
                category: req.category,
                priority: req.priority,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from_task(task)?)))
}

/// PUT/PATCH /tasks/:task_id
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    caller: AuthenticatedCaller,
    Path(task_id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state
        .task_service
        .update_task(
            caller.identity.identity_id,
            task_id,
            TaskPatch {
                title: req.title,
                description: req.description,
                due_date: req.due_date,
                completed: req.completed,
                category: req.category,
                priority: req.priority,
            },
        )
        .await?;

    Ok(Json(TaskResponse::from_task(task)?))
}

/// DELETE /tasks/:task_id
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    caller: AuthenticatedCaller,
    Path(task_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .task_service
        .delete_task(caller.identity.identity_id, task_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /tasks/:task_id/toggle_complete
pub async fn toggle_complete(
    State(state): State<Arc<AppState>>,
    caller: AuthenticatedCaller,
    Path(task_id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state
        .task_service
        .toggle_complete(caller.identity.identity_id, task_id)
        .await?;

    Ok(Json(TaskResponse::from_task(task)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_body_distinguishes_null_from_absent() {
        let req: UpdateTaskRequest = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(req.description, Some(None));
        assert_eq!(req.due_date, None);
        assert_eq!(req.category, None);

        let req: UpdateTaskRequest =
            serde_json::from_str(r#"{"description": "buy milk", "priority": null}"#).unwrap();
        assert_eq!(req.description, Some(Some("buy milk".to_string())));
        assert_eq!(req.priority, Some(None));
    }
}
