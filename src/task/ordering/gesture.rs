//! Routing of drag-and-drop gestures onto the ordering engine.
//!
//! The board UI reports two callbacks: a drop onto a quadrant and a hover
//! over another task. Unlike the underlying pure functions, the router
//! reports semantic no-ops as [`TaskDomainError::NoOp`] so callers can skip
//! persistence entirely.

use super::{assign_to_quadrant, find_task, reorder};
use crate::task::domain::{NoOpReason, Quadrant, Task, TaskDomainError, TaskId};

/// A completed drag interaction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragGesture {
    /// A task was released over a quadrant, or outside every quadrant when
    /// `target` is `None`.
    Drop {
        /// The dragged task.
        task_id: TaskId,
        /// The quadrant under the pointer, if any.
        target: Option<Quadrant>,
    },
    /// A dragged task hovered over another task.
    HoverReorder {
        /// The dragged task.
        drag_id: TaskId,
        /// The task under the pointer.
        hover_id: TaskId,
    },
}

/// Applies a gesture to the task list.
///
/// # Errors
///
/// Returns [`TaskDomainError::NotFound`] for unknown ids and
/// [`TaskDomainError::NoOp`] when the gesture changes nothing.
pub fn apply_gesture(tasks: &[Task], gesture: DragGesture) -> Result<Vec<Task>, TaskDomainError> {
    match gesture {
        DragGesture::Drop { task_id, target } => on_drop(tasks, task_id, target),
        DragGesture::HoverReorder { drag_id, hover_id } => {
            on_hover_reorder(tasks, drag_id, hover_id)
        }
    }
}

/// Handles a task released over a quadrant.
///
/// # Errors
///
/// Returns [`TaskDomainError::NoOp`] with [`NoOpReason::DropCancelled`]
/// when there is no target and [`NoOpReason::SameQuadrant`] when the task
/// already occupies the target, or [`TaskDomainError::NotFound`] for an
/// unknown task.
pub fn on_drop(
    tasks: &[Task],
    task_id: TaskId,
    target: Option<Quadrant>,
) -> Result<Vec<Task>, TaskDomainError> {
    let Some(quadrant) = target else {
        return Err(TaskDomainError::NoOp(NoOpReason::DropCancelled));
    };
    if find_task(tasks, task_id)?.quadrant() == quadrant {
        return Err(TaskDomainError::NoOp(NoOpReason::SameQuadrant));
    }
    assign_to_quadrant(tasks, task_id, quadrant)
}

/// Handles a dragged task hovering over another task.
///
/// Hovering over a task in another quadrant moves the dragged task to the
/// end of that quadrant.
///
/// # Errors
///
/// Returns [`TaskDomainError::NoOp`] with [`NoOpReason::SamePosition`] when
/// both tasks share a position, or [`TaskDomainError::NotFound`] for
/// unknown ids.
pub fn on_hover_reorder(
    tasks: &[Task],
    drag_id: TaskId,
    hover_id: TaskId,
) -> Result<Vec<Task>, TaskDomainError> {
    let drag = find_task(tasks, drag_id)?;
    let hover = find_task(tasks, hover_id)?;
    if drag.quadrant() != hover.quadrant() {
        return assign_to_quadrant(tasks, drag_id, hover.quadrant());
    }
    if drag_id == hover_id || drag.order() == hover.order() {
        return Err(TaskDomainError::NoOp(NoOpReason::SamePosition));
    }
    reorder(tasks, drag_id, hover_id)
}
