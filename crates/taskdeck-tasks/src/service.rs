//! Task repository implementation.

use crate::{errors::*, traits::TaskAccess, types::*};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;
use taskdeck_identity::current_timestamp;
use taskdeck_storage::{Batch, Storage, CF_TASKS, CF_TASKS_BY_OWNER};

/// Task repository backed by the storage layer
///
/// Mutations are read-modify-write sequences; RocksDB offers no row
/// locking, so they serialize behind `mutation_lock`. Two concurrent
/// toggles therefore each observe the latest persisted state and cancel
/// out instead of losing an update.
pub struct TaskService<S: Storage> {
    storage: Arc<S>,
    mutation_lock: Mutex<()>,
}

impl<S: Storage> TaskService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            mutation_lock: Mutex::new(()),
        }
    }

    fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(TaskError::Validation("title is required".to_string()));
        }
        Ok(())
    }

    /// Fetch a task if and only if `caller` owns it
    ///
    /// A task owned by someone else yields the same `NotFound` as a task
    /// that does not exist.
    async fn owned_task(&self, caller: Uuid, task_id: Uuid) -> Result<Task> {
        match self.storage.get::<_, Task>(CF_TASKS, &task_id).await? {
            Some(task) if task.owner_id == caller => Ok(task),
            _ => Err(TaskError::NotFound(task_id)),
        }
    }
}

#[async_trait]
impl<S: Storage + 'static> TaskAccess for TaskService<S> {
    async fn list_tasks(&self, caller: Uuid) -> Result<Vec<Task>> {
        let index: Vec<(Vec<u8>, Uuid)> = self
            .storage
            .get_by_prefix(CF_TASKS_BY_OWNER, &caller)
            .await?;

        let mut tasks = Vec::with_capacity(index.len());
        for (_key, task_id) in index {
            if let Some(task) = self.storage.get::<_, Task>(CF_TASKS, &task_id).await? {
                tasks.push(task);
            }
        }

        Ok(tasks)
    }

    async fn create_task(&self, caller: Uuid, draft: TaskDraft) -> Result<Task> {
        Self::validate_title(&draft.title)?;

        let task = Task {
            task_id: Uuid::new_v4(),
            owner_id: caller,
            title: draft.title,
            description: draft.description,
            created_at: current_timestamp(),
            due_date: draft.due_date,
            completed: false,
            category: draft.category,
            priority: draft.priority,
        };

        // Record and owner index land atomically.
        let mut batch = Batch::new();
        batch.put(CF_TASKS, &task.task_id, &task)?;
        batch.put(CF_TASKS_BY_OWNER, &(caller, task.task_id), &task.task_id)?;
        self.storage.write(batch).await?;

        info!(task_id = %task.task_id, owner_id = %caller, "Task created");
        Ok(task)
    }

    async fn update_task(&self, caller: Uuid, task_id: Uuid, patch: TaskPatch) -> Result<Task> {
        if let Some(title) = &patch.title {
            Self::validate_title(title)?;
        }

        let _guard = self.mutation_lock.lock().await;
        let mut task = self.owned_task(caller, task_id).await?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        if let Some(category) = patch.category {
            task.category = category;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }

        self.storage.put(CF_TASKS, &task_id, &task).await?;

        info!(task_id = %task_id, owner_id = %caller, "Task updated");
        Ok(task)
    }

    async fn delete_task(&self, caller: Uuid, task_id: Uuid) -> Result<()> {
        let _guard = self.mutation_lock.lock().await;
        self.owned_task(caller, task_id).await?;

        let mut batch = Batch::new();
        batch.delete(CF_TASKS, &task_id)?;
        batch.delete(CF_TASKS_BY_OWNER, &(caller, task_id))?;
        self.storage.write(batch).await?;

        info!(task_id = %task_id, owner_id = %caller, "Task deleted");
        Ok(())
    }

    async fn toggle_complete(&self, caller: Uuid, task_id: Uuid) -> Result<Task> {
        let _guard = self.mutation_lock.lock().await;
        let mut task = self.owned_task(caller, task_id).await?;

        task.completed = !task.completed;
        self.storage.put(CF_TASKS, &task_id, &task).await?;

        info!(
            task_id = %task_id,
            owner_id = %caller,
            completed = task.completed,
            "Task completion toggled"
        );
        Ok(task)
    }
}
