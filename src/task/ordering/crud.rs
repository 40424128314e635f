//! Adding, editing, and deleting board tasks.

use super::{find_task, next_order};
use crate::task::domain::{NewTask, Task, TaskDomainError, TaskId, TaskPatch};
use mockable::Clock;

/// Builds a task ranked after every task in its quadrant.
///
/// The returned task is not yet part of `tasks`.
///
/// # Errors
///
/// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
pub fn create_task(
    tasks: &[Task],
    request: NewTask,
    clock: &impl Clock,
) -> Result<Task, TaskDomainError> {
    let order = next_order(tasks, request.quadrant());
    Task::create(request, order, clock)
}

/// Appends a new task ranked after every task in its quadrant.
///
/// # Errors
///
/// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
pub fn add_task(
    tasks: &[Task],
    request: NewTask,
    clock: &impl Clock,
) -> Result<Vec<Task>, TaskDomainError> {
    let task = create_task(tasks, request, clock)?;
    let mut updated = tasks.to_vec();
    updated.push(task);
    Ok(updated)
}

/// Merges a content patch into one task. Order and quadrant never change.
///
/// The task's `updated_at` is stamped from `clock` when the patch changes a
/// field; a patch that leaves the task as it was stamps nothing.
///
/// # Errors
///
/// Returns [`TaskDomainError::NotFound`] when `task_id` is absent, or
/// [`TaskDomainError::EmptyTitle`] when the patch blanks the title.
pub fn edit_task(
    tasks: &[Task],
    task_id: TaskId,
    patch: &TaskPatch,
    clock: &impl Clock,
) -> Result<Vec<Task>, TaskDomainError> {
    find_task(tasks, task_id)?;
    tasks
        .iter()
        .map(|task| {
            let mut updated = task.clone();
            if task.id() == task_id {
                updated.apply_patch(patch)?;
                if updated != *task {
                    updated.touch(clock.utc());
                }
            }
            Ok(updated)
        })
        .collect()
}

/// Removes a task. Remaining orders are not renumbered.
///
/// # Errors
///
/// Returns [`TaskDomainError::NotFound`] when `task_id` is absent.
pub fn delete_task(tasks: &[Task], task_id: TaskId) -> Result<Vec<Task>, TaskDomainError> {
    find_task(tasks, task_id)?;
    Ok(tasks
        .iter()
        .filter(|task| task.id() != task_id)
        .cloned()
        .collect())
}
