//! Board commands mirrored into the task store.

use super::helpers::open_board;
use chrono::NaiveDate;
use eyre::{WrapErr, eyre};
use taskmatrix::project::ports::ProjectRepository;
use taskmatrix::task::domain::{NewTask, Priority, Quadrant, Task, TaskPatch, TaskStatus};

fn orders_in(tasks: &[Task], quadrant: Quadrant) -> Vec<i64> {
    let mut orders: Vec<i64> = tasks
        .iter()
        .filter(|task| task.quadrant() == quadrant)
        .map(Task::order)
        .collect();
    orders.sort_unstable();
    orders
}

#[tokio::test(flavor = "multi_thread")]
async fn store_mirrors_the_board_after_every_gesture() -> eyre::Result<()> {
    let harness = open_board("Launch").await?;
    let workspace = &harness.workspace;

    let a = workspace
        .add_task(NewTask::new("A", Quadrant::UrgentImportant))
        .map_err(|err| eyre!("add A: {err}"))?;
    let b = workspace
        .add_task(NewTask::new("B", Quadrant::UrgentImportant))
        .map_err(|err| eyre!("add B: {err}"))?;
    workspace
        .hover_reorder(b.id(), a.id())
        .map_err(|err| eyre!("reorder: {err}"))?;
    workspace
        .drop_task(a.id(), Some(Quadrant::NotUrgentImportant))
        .map_err(|err| eyre!("drop: {err}"))?;

    let stored = harness.stored_tasks().await?;
    let board = harness.board_tasks()?;
    assert_eq!(stored, board);
    assert_eq!(orders_in(&board, Quadrant::UrgentImportant), vec![0]);
    assert_eq!(orders_in(&board, Quadrant::NotUrgentImportant), vec![0]);

    let document = harness
        .projects
        .find_by_id(harness.project_id()?)
        .await
        .wrap_err("load project document")?
        .ok_or_else(|| eyre!("project document missing"))?;
    let mut persisted = document.tasks().to_vec();
    persisted.sort_by_key(Task::id);
    assert_eq!(persisted, board);
    assert!(document.updated_at().is_some());

    harness.workspace.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_leaves_gaps_in_the_stored_orders() -> eyre::Result<()> {
    let harness = open_board("Launch").await?;
    let mut ids = Vec::new();
    for title in ["A", "B", "C"] {
        let task = harness
            .workspace
            .add_task(NewTask::new(title, Quadrant::UrgentNotImportant))
            .map_err(|err| eyre!("add {title}: {err}"))?;
        ids.push(task.id());
    }
    let middle = *ids.get(1).ok_or_else(|| eyre!("missing task B"))?;

    harness
        .workspace
        .delete_task(middle)
        .map_err(|err| eyre!("delete: {err}"))?;

    let stored = harness.stored_tasks().await?;
    assert_eq!(orders_in(&stored, Quadrant::UrgentNotImportant), vec![0, 2]);

    let next = harness
        .workspace
        .add_task(NewTask::new("D", Quadrant::UrgentNotImportant))
        .map_err(|err| eyre!("add D: {err}"))?;
    assert_eq!(next.order(), 3);

    harness.workspace.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn edits_merge_only_the_patched_fields() -> eyre::Result<()> {
    let harness = open_board("Launch").await?;
    let due = NaiveDate::from_ymd_opt(2024, 7, 1).ok_or_else(|| eyre!("invalid date"))?;
    let task = harness
        .workspace
        .add_task(
            NewTask::new("Draft", Quadrant::NotUrgentNotImportant).with_description("first pass"),
        )
        .map_err(|err| eyre!("add: {err}"))?;

    let edited = harness
        .workspace
        .edit_task(
            task.id(),
            &TaskPatch::new()
                .with_title("Final draft")
                .clear_description()
                .with_due_date(due),
        )
        .map_err(|err| eyre!("edit: {err}"))?;

    assert_eq!(edited.title(), "Final draft");
    assert_eq!(edited.description(), None);
    assert_eq!(edited.due_date(), Some(due));
    assert_eq!(edited.order(), task.order());
    assert_eq!(edited.quadrant(), task.quadrant());

    let stored = harness.stored_tasks().await?;
    assert_eq!(stored, vec![edited]);

    harness.workspace.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn progress_changes_reach_the_store_and_the_progress_figure() -> eyre::Result<()> {
    let harness = open_board("Launch").await?;
    let first = harness
        .workspace
        .add_task(NewTask::new("Outline", Quadrant::UrgentImportant))
        .map_err(|err| eyre!("add outline: {err}"))?;
    harness
        .workspace
        .add_task(NewTask::new("Review", Quadrant::UrgentImportant))
        .map_err(|err| eyre!("add review: {err}"))?;

    harness
        .workspace
        .set_task_status(first.id(), TaskStatus::Done)
        .map_err(|err| eyre!("status: {err}"))?;
    let prioritised = harness
        .workspace
        .set_task_priority(first.id(), Priority::High)
        .map_err(|err| eyre!("priority: {err}"))?;

    assert_eq!(harness.snapshot()?.progress_percent(), 50);
    assert_eq!(prioritised.order(), first.order());
    let stored = harness.stored_tasks().await?;
    assert_eq!(stored, harness.board_tasks()?);
    let stored_first = stored
        .iter()
        .find(|task| task.id() == first.id())
        .ok_or_else(|| eyre!("stored task missing"))?;
    assert_eq!(stored_first.status(), TaskStatus::Done);
    assert_eq!(stored_first.priority(), Priority::High);

    harness.workspace.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn project_settings_reach_the_repository() -> eyre::Result<()> {
    let harness = open_board("Launch").await?;

    harness
        .workspace
        .rename_project("Relaunch")
        .map_err(|err| eyre!("rename: {err}"))?;
    harness
        .workspace
        .update_description(Some("Autumn release"))
        .map_err(|err| eyre!("describe: {err}"))?;
    harness
        .workspace
        .flush()
        .await
        .map_err(|err| eyre!("flush: {err}"))?;

    let document = harness
        .projects
        .find_by_id(harness.project_id()?)
        .await
        .wrap_err("load project document")?
        .ok_or_else(|| eyre!("project document missing"))?;
    assert_eq!(document.name().as_str(), "Relaunch");
    assert_eq!(document.description(), Some("Autumn release"));

    harness.workspace.shutdown().await;
    Ok(())
}
