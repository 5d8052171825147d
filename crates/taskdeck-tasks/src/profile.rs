//! Profile aggregation over the caller's tasks.

use crate::{
    errors::Result,
    traits::{Profiles, TaskAccess},
    types::ProfileSummary,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use taskdeck_identity::IdentityDirectory;

/// Computes per-owner statistics from live storage on every call
pub struct ProfileService<I, T>
where
    I: IdentityDirectory,
    T: TaskAccess,
{
    identities: Arc<I>,
    tasks: Arc<T>,
}

impl<I, T> ProfileService<I, T>
where
    I: IdentityDirectory,
    T: TaskAccess,
{
    pub fn new(identities: Arc<I>, tasks: Arc<T>) -> Self {
        Self { identities, tasks }
    }
}

#[async_trait]
impl<I, T> Profiles for ProfileService<I, T>
where
    I: IdentityDirectory + 'static,
    T: TaskAccess + 'static,
{
    async fn get_profile(&self, caller: Uuid) -> Result<ProfileSummary> {
        let identity = self.identities.get_identity(caller).await?;
        let tasks = self.tasks.list_tasks(caller).await?;

        let task_count = tasks.len();
        let completed_tasks = tasks.iter().filter(|t| t.completed).count();

        // Defined as exactly 0 for an empty task list.
        let completion_rate = if task_count > 0 {
            completed_tasks as f64 / task_count as f64 * 100.0
        } else {
            0.0
        };

        Ok(ProfileSummary {
            username: identity.username,
            email: identity.email,
            created_at: identity.created_at,
            task_count,
            completed_tasks,
            completion_rate,
        })
    }
}
