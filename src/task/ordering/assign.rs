//! Cross-quadrant moves.

use super::{find_task, next_order};
use crate::task::domain::{Quadrant, Task, TaskDomainError, TaskId};

/// Moves a task to `target`, ranking it after the quadrant's current tasks.
///
/// Assigning a task to the quadrant it already occupies returns the input
/// unchanged; the task keeps its order. Otherwise only the moved task
/// changes: it takes `target` and an order one above the highest order in
/// `target` (or `0` when `target` is empty).
///
/// # Errors
///
/// Returns [`TaskDomainError::NotFound`] when `task_id` is not in `tasks`.
pub fn assign_to_quadrant(
    tasks: &[Task],
    task_id: TaskId,
    target: Quadrant,
) -> Result<Vec<Task>, TaskDomainError> {
    let current = find_task(tasks, task_id)?;
    if current.quadrant() == target {
        return Ok(tasks.to_vec());
    }

    let order = next_order(tasks, target);
    Ok(tasks
        .iter()
        .map(|task| {
            let mut updated = task.clone();
            if task.id() == task_id {
                updated.place(target, order);
            }
            updated
        })
        .collect())
}
