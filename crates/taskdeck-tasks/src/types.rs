//! Task type definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority, ordered low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Task record
///
/// `owner_id` is assigned to the creator at creation time and no exposed
/// operation can reassign it. `created_at` is likewise set once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub task_id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: u64,
    /// Accepted verbatim; no format or temporal validation is applied.
    pub due_date: Option<String>,
    pub completed: bool,
    pub category: Option<String>,
    pub priority: Option<Priority>,
}

/// Client-settable fields for task creation
///
/// `task_id`, `owner_id`, `created_at`, and `completed` are server-assigned
/// and deliberately absent from this shape.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
}

/// Partial update of a task's mutable fields
///
/// Clearable fields are doubly optional: the outer `None` leaves the
/// field unchanged, `Some(None)` clears it, `Some(Some(v))` replaces it.
/// `title` is required on the record and can only be replaced.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<String>>,
    pub completed: Option<bool>,
    pub category: Option<Option<String>>,
    pub priority: Option<Option<Priority>>,
}

/// Aggregated per-owner statistics, computed at request time
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub username: String,
    pub email: String,
    pub created_at: u64,
    pub task_count: usize,
    pub completed_tasks: usize,
    pub completion_rate: f64,
}
