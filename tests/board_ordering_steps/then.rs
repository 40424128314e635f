//! Then steps for board ordering BDD scenarios.

use super::world::{BoardWorld, quadrant, run_async};
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::then;
use taskmatrix::task::{domain::Task, ports::TaskStore};

fn board_task(world: &BoardWorld, title: &str) -> eyre::Result<Task> {
    let task_id = world.task_id(title)?;
    let snapshot = world
        .workspace()?
        .snapshot()
        .map_err(|err| eyre!("snapshot failed: {err}"))?;
    snapshot
        .task(task_id)
        .cloned()
        .ok_or_else(|| eyre!("task '{title}' is not on the board"))
}

#[then(r#"the task "{title}" has order {order:i64}"#)]
fn task_has_order(world: &BoardWorld, title: String, order: i64) -> Result<(), eyre::Report> {
    let task = board_task(world, &title)?;
    if task.order() != order {
        return Err(eyre!(
            "expected '{title}' to have order {order}, found {}",
            task.order()
        ));
    }
    Ok(())
}

#[then(r#"the task "{title}" is in "{target}" with order {order:i64}"#)]
fn task_is_in(
    world: &BoardWorld,
    title: String,
    target: String,
    order: i64,
) -> Result<(), eyre::Report> {
    let task = board_task(world, &title)?;
    let expected = quadrant(&target)?;
    if task.quadrant() != expected || task.order() != order {
        return Err(eyre!(
            "expected '{title}' in {expected} with order {order}, found {} with order {}",
            task.quadrant(),
            task.order()
        ));
    }
    Ok(())
}

#[then(r#"the "{target}" quadrant lists "{titles}""#)]
fn quadrant_lists(world: &BoardWorld, target: String, titles: String) -> Result<(), eyre::Report> {
    let snapshot = world
        .workspace()?
        .snapshot()
        .map_err(|err| eyre!("snapshot failed: {err}"))?;
    let listed: Vec<&str> = snapshot
        .quadrant_tasks(quadrant(&target)?)
        .into_iter()
        .map(Task::title)
        .collect();
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();
    if listed != expected {
        return Err(eyre!("expected {target} to list {expected:?}, found {listed:?}"));
    }
    Ok(())
}

#[then(r#"the gesture is ignored because "{reason}""#)]
fn gesture_ignored(world: &BoardWorld, reason: String) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre!("expected the last gesture to be rejected"))?;
    match err.no_op_reason() {
        Some(found) if found.as_str() == reason => Ok(()),
        _ => Err(eyre!("expected no-op '{reason}', got {err}")),
    }
}

#[then("the task store matches the board")]
fn store_matches_board(world: &BoardWorld) -> Result<(), eyre::Report> {
    let workspace = world.workspace()?;
    run_async(workspace.flush()).map_err(|err| eyre!("flush failed: {err}"))?;
    let snapshot = workspace
        .snapshot()
        .map_err(|err| eyre!("snapshot failed: {err}"))?;

    let mut stored = run_async(world.tasks.list_tasks(snapshot.id())).wrap_err("list stored tasks")?;
    stored.sort_by_key(Task::id);
    let mut board = snapshot.tasks().to_vec();
    board.sort_by_key(Task::id);
    if stored != board {
        return Err(eyre!("task store diverged: {stored:?} vs {board:?}"));
    }
    Ok(())
}
