//! Unit tests for the task board.


use crate::task::domain::{PersistedTaskData, Priority, Quadrant, Task, TaskId, TaskStatus};
use chrono::DateTime;

/// Builds a task with a fixed creation time `offset_secs` after a base instant.
fn persisted_task(title: &str, quadrant: Quadrant, order: i64, offset_secs: i64) -> Task {
    let created_at = DateTime::from_timestamp(1_700_000_000 + offset_secs, 0)
        .expect("timestamp should be in range");
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: title.to_owned(),
        description: None,
        quadrant,
        assignee: None,
        due_date: None,
        status: TaskStatus::Todo,
        priority: Priority::Medium,
        created_at,
        updated_at: None,
        order,
    })
}

/// Builds one task per order value, all in `quadrant`, created in sequence.
fn quadrant_with_orders(quadrant: Quadrant, orders: &[i64]) -> Vec<Task> {
    orders
        .iter()
        .zip(0_i64..)
        .map(|(order, offset)| persisted_task(&format!("task {offset}"), quadrant, *order, offset))
        .collect()
}

fn sorted_orders(tasks: &[Task], quadrant: Quadrant) -> Vec<i64> {
    let mut orders: Vec<i64> = tasks
        .iter()
        .filter(|task| task.quadrant() == quadrant)
        .map(Task::order)
        .collect();
    orders.sort_unstable();
    orders
}

fn find(tasks: &[Task], task_id: TaskId) -> &Task {
    tasks
        .iter()
        .find(|task| task.id() == task_id)
        .expect("task should be present")
}

fn id_at(tasks: &[Task], position: usize) -> TaskId {
    tasks.get(position).expect("task position in range").id()
}
