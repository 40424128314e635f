//! When steps for board ordering BDD scenarios.

use super::world::{BoardWorld, quadrant};
use eyre::eyre;
use rstest_bdd_macros::when;
use taskmatrix::task::domain::NewTask;

#[when(r#"the task "{title}" is added to "{target}""#)]
fn add_task(world: &mut BoardWorld, title: String, target: String) -> Result<(), eyre::Report> {
    let request = NewTask::new(title.as_str(), quadrant(&target)?);
    let task = world
        .workspace()?
        .add_task(request)
        .map_err(|err| eyre!("adding '{title}' failed: {err}"))?;
    world.task_ids.insert(title, task.id());
    Ok(())
}

#[when(r#"the task "{dragged}" is dragged over the task "{hovered}""#)]
fn drag_over(world: &mut BoardWorld, dragged: String, hovered: String) -> Result<(), eyre::Report> {
    let drag_id = world.task_id(&dragged)?;
    let hover_id = world.task_id(&hovered)?;
    world.last_error = world.workspace()?.hover_reorder(drag_id, hover_id).err();
    Ok(())
}

#[when(r#"the task "{title}" is dropped on "{target}""#)]
fn drop_on(world: &mut BoardWorld, title: String, target: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let target_quadrant = quadrant(&target)?;
    world.last_error = world
        .workspace()?
        .drop_task(task_id, Some(target_quadrant))
        .err();
    Ok(())
}

#[when(r#"the task "{title}" is dropped outside the board"#)]
fn drop_outside(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    world.last_error = world.workspace()?.drop_task(task_id, None).err();
    Ok(())
}

#[when(r#"the task "{title}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    world
        .workspace()?
        .delete_task(task_id)
        .map_err(|err| eyre!("deleting '{title}' failed: {err}"))?;
    Ok(())
}
