//! In-memory task store for tests and offline use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskChanges, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, StoredTask>,
    next_sequence: u64,
}

#[derive(Debug, Clone)]
struct StoredTask {
    project_id: ProjectId,
    sequence: u64,
    task: Task,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored tasks across all projects.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn len(&self) -> TaskStoreResult<usize> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.len())
    }

    /// Returns `true` when no task is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lock is poisoned.
    pub fn is_empty(&self) -> TaskStoreResult<bool> {
        self.len().map(|count| count == 0)
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_tasks(&self, project_id: ProjectId) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut stored: Vec<&StoredTask> = state
            .tasks
            .values()
            .filter(|entry| entry.project_id == project_id)
            .collect();
        stored.sort_by_key(|entry| entry.sequence);
        Ok(stored.into_iter().map(|entry| entry.task.clone()).collect())
    }

    async fn create_task(&self, project_id: ProjectId, task: &Task) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }

        let sequence = state.next_sequence;
        state.next_sequence = sequence.saturating_add(1);
        state.tasks.insert(
            task.id(),
            StoredTask {
                project_id,
                sequence,
                task: task.clone(),
            },
        );
        Ok(task.clone())
    }

    async fn update_task(&self, task_id: TaskId, changes: &TaskChanges) -> TaskStoreResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let entry = state
            .tasks
            .get_mut(&task_id)
            .ok_or(TaskStoreError::NotFound(task_id))?;

        let mut updated = entry.task.clone();
        updated
            .apply_changes(changes)
            .map_err(TaskStoreError::persistence)?;
        entry.task = updated.clone();
        Ok(updated)
    }

    async fn delete_task(&self, task_id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .tasks
            .remove(&task_id)
            .map(|_| ())
            .ok_or(TaskStoreError::NotFound(task_id))
    }
}
