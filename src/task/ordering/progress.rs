//! Status and priority updates.
//!
//! Both leave every task's quadrant and order untouched.

use super::find_task;
use crate::task::domain::{NoOpReason, Priority, Task, TaskDomainError, TaskId, TaskStatus};
use mockable::Clock;

/// Sets a task's progress state and stamps its `updated_at`.
///
/// # Errors
///
/// Returns [`TaskDomainError::NotFound`] when `task_id` is absent and
/// [`TaskDomainError::NoOp`] with [`NoOpReason::UnchangedStatus`] when the
/// task already has `status`.
pub fn set_status(
    tasks: &[Task],
    task_id: TaskId,
    status: TaskStatus,
    clock: &impl Clock,
) -> Result<Vec<Task>, TaskDomainError> {
    if find_task(tasks, task_id)?.status() == status {
        return Err(TaskDomainError::NoOp(NoOpReason::UnchangedStatus));
    }
    Ok(update_one(tasks, task_id, clock, |task| task.set_status(status)))
}

/// Sets a task's priority and stamps its `updated_at`.
///
/// # Errors
///
/// Returns [`TaskDomainError::NotFound`] when `task_id` is absent and
/// [`TaskDomainError::NoOp`] with [`NoOpReason::UnchangedPriority`] when
/// the task already has `priority`.
pub fn set_priority(
    tasks: &[Task],
    task_id: TaskId,
    priority: Priority,
    clock: &impl Clock,
) -> Result<Vec<Task>, TaskDomainError> {
    if find_task(tasks, task_id)?.priority() == priority {
        return Err(TaskDomainError::NoOp(NoOpReason::UnchangedPriority));
    }
    Ok(update_one(tasks, task_id, clock, |task| task.set_priority(priority)))
}

fn update_one(
    tasks: &[Task],
    task_id: TaskId,
    clock: &impl Clock,
    change: impl Fn(&mut Task),
) -> Vec<Task> {
    let now = clock.utc();
    tasks
        .iter()
        .map(|task| {
            let mut updated = task.clone();
            if task.id() == task_id {
                change(&mut updated);
                updated.touch(now);
            }
            updated
        })
        .collect()
}
