//! # taskdeck-tasks
//!
//! Task subsystem for taskdeck:
//! - Owner-scoped task repository (create, list, update, delete, toggle)
//! - Profile aggregation (task counts and completion rate)
//!
//! Every operation takes the caller's identity explicitly; the repository
//! exposes no way to query another owner's rows, and a task that exists
//! but belongs to someone else is indistinguishable from one that does
//! not exist.

#![warn(clippy::all)]

pub mod errors;
pub mod profile;
pub mod service;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;

pub use errors::{Result, TaskError};
pub use profile::ProfileService;
pub use service::TaskService;
pub use traits::{Profiles, TaskAccess};
pub use types::{Priority, ProfileSummary, Task, TaskDraft, TaskPatch};
