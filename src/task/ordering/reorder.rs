//! Same-quadrant drag reordering.

use super::{find_task, quadrant_tasks};
use crate::task::domain::{Task, TaskDomainError, TaskId};
use std::collections::HashMap;

/// Moves the dragged task to the hovered task's position in their quadrant.
///
/// The quadrant's tasks, in display order, form a sequence of rank slots
/// holding their current `order` values. The dragged task takes the hovered
/// task's slot and every task between the two slots shifts one slot toward
/// the dragged task's old slot, taking that slot's value. With contiguous
/// orders this decrements (dragging down) or increments (dragging up) every
/// task in between; the hovered task always ends next to the dragged one.
///
/// All new values are computed from the input snapshot, so the set of order
/// values used in the quadrant is only permuted, never created or lost.
///
/// The input is returned unchanged when the tasks sit in different
/// quadrants (cross-quadrant moves belong to
/// [`super::assign_to_quadrant`]) or when both share the same order.
///
/// # Errors
///
/// Returns [`TaskDomainError::NotFound`] when either id is not in `tasks`.
pub fn reorder(
    tasks: &[Task],
    drag_id: TaskId,
    hover_id: TaskId,
) -> Result<Vec<Task>, TaskDomainError> {
    let drag = find_task(tasks, drag_id)?;
    let hover = find_task(tasks, hover_id)?;
    if drag.quadrant() != hover.quadrant() || drag.order() == hover.order() {
        return Ok(tasks.to_vec());
    }

    let slots = quadrant_tasks(tasks, drag.quadrant());
    let orders: Vec<i64> = slots.iter().map(|task| task.order()).collect();
    let mut ranked: Vec<TaskId> = slots.iter().map(|task| task.id()).collect();
    let from = slot_of(&ranked, drag_id)?;
    let to = slot_of(&ranked, hover_id)?;

    let moved = ranked.remove(from);
    ranked.insert(to, moved);
    let assignments: HashMap<TaskId, i64> = ranked.into_iter().zip(orders).collect();

    Ok(tasks
        .iter()
        .map(|task| {
            let mut updated = task.clone();
            if let Some(&order) = assignments.get(&task.id()) {
                updated.set_order(order);
            }
            updated
        })
        .collect())
}

fn slot_of(ranked: &[TaskId], task_id: TaskId) -> Result<usize, TaskDomainError> {
    ranked
        .iter()
        .position(|id| *id == task_id)
        .ok_or(TaskDomainError::NotFound(task_id))
}
