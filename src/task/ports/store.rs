//! Persistence port mirroring a project's task collection.

use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskChanges, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Document-store contract for board tasks.
///
/// The board never treats the store as the source of truth for an in-flight
/// update; it writes here only after computing the new in-memory state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Lists the tasks stored for a project.
    async fn list_tasks(&self, project_id: ProjectId) -> TaskStoreResult<Vec<Task>>;

    /// Stores a new task under a project and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the id already exists.
    async fn create_task(&self, project_id: ProjectId, task: &Task) -> TaskStoreResult<Task>;

    /// Merges a partial record into a stored task and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update_task(&self, task_id: TaskId, changes: &TaskChanges) -> TaskStoreResult<Task>;

    /// Deletes a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn delete_task(&self, task_id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
