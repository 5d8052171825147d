//! Task trait definitions.

use crate::{errors::Result, types::*};
use async_trait::async_trait;
use uuid::Uuid;

/// Owner-scoped task repository
///
/// Every method takes the authenticated caller explicitly and only ever
/// touches rows owned by that caller.
#[async_trait]
pub trait TaskAccess: Send + Sync {
    /// List all tasks owned by `caller`, in storage order
    async fn list_tasks(&self, caller: Uuid) -> Result<Vec<Task>>;

    /// Create a task owned by `caller` and return the stored record
    async fn create_task(&self, caller: Uuid, draft: TaskDraft) -> Result<Task>;

    /// Apply a partial update to a task owned by `caller`
    async fn update_task(&self, caller: Uuid, task_id: Uuid, patch: TaskPatch) -> Result<Task>;

    /// Delete a task owned by `caller`
    async fn delete_task(&self, caller: Uuid, task_id: Uuid) -> Result<()>;

    /// Flip the completed flag of a task owned by `caller`
    async fn toggle_complete(&self, caller: Uuid, task_id: Uuid) -> Result<Task>;
}

/// Per-owner statistics over the task store
#[async_trait]
pub trait Profiles: Send + Sync {
    /// Aggregate the caller's account info and task statistics
    async fn get_profile(&self, caller: Uuid) -> Result<ProfileSummary>;
}
