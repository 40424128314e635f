//! Pure ordering engine for the task board.
//!
//! Every function takes the current task list by reference and returns a
//! new list; nothing here performs I/O or mutates its input. Callers persist
//! the result. The functions maintain the per-quadrant ranking described on
//! [`Task`]: within a quadrant, tasks sort by `(order, created_at)` and then
//! by list position.

mod assign;
mod crud;
pub mod gesture;
mod progress;
mod reorder;

pub use assign::assign_to_quadrant;
pub use crud::{add_task, create_task, delete_task, edit_task};
pub use gesture::{DragGesture, apply_gesture, on_drop, on_hover_reorder};
pub use progress::{set_priority, set_status};
pub use reorder::reorder;

use crate::task::domain::{Quadrant, Task, TaskChanges, TaskDomainError, TaskId};
use std::collections::HashMap;

/// Returns the order a task appended to `quadrant` receives.
///
/// This is one more than the highest order in the quadrant, or `0` when the
/// quadrant is empty.
#[must_use]
pub fn next_order(tasks: &[Task], quadrant: Quadrant) -> i64 {
    tasks
        .iter()
        .filter(|task| task.quadrant() == quadrant)
        .map(Task::order)
        .max()
        .map_or(0, |highest| highest.saturating_add(1))
}

/// Returns the tasks of a quadrant in display order.
#[must_use]
pub fn quadrant_tasks(tasks: &[Task], quadrant: Quadrant) -> Vec<&Task> {
    let mut ranked: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.quadrant() == quadrant)
        .collect();
    ranked.sort_by_key(|task| (task.order(), task.created_at()));
    ranked
}

/// Lists the persistence partials that turn `before` into `after`.
///
/// Tasks only present in one of the lists are ignored; creation and
/// deletion are reported separately by the callers that perform them.
#[must_use]
pub fn changed_tasks(before: &[Task], after: &[Task]) -> Vec<(TaskId, TaskChanges)> {
    let previous: HashMap<TaskId, &Task> = before.iter().map(|task| (task.id(), task)).collect();
    after
        .iter()
        .filter_map(|task| {
            let old = previous.get(&task.id())?;
            TaskChanges::between(old, task).map(|changes| (task.id(), changes))
        })
        .collect()
}

pub(crate) fn find_task(tasks: &[Task], task_id: TaskId) -> Result<&Task, TaskDomainError> {
    tasks
        .iter()
        .find(|task| task.id() == task_id)
        .ok_or(TaskDomainError::NotFound(task_id))
}
