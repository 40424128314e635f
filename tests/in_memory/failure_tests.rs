//! Persistence failures never reach the command caller.

use std::sync::Arc;

use super::helpers::{OfflineTaskStore, open_board_with};
use eyre::eyre;
use taskmatrix::project::services::{PersistCommand, PersistenceError};
use taskmatrix::task::domain::{NewTask, Quadrant};
use taskmatrix::task::ports::TaskStoreError;

#[tokio::test(flavor = "multi_thread")]
async fn commands_succeed_while_the_store_is_offline() -> eyre::Result<()> {
    let mut harness = open_board_with("Launch", Arc::new(OfflineTaskStore)).await?;

    let task = harness
        .workspace
        .add_task(NewTask::new("Ship", Quadrant::UrgentImportant))
        .map_err(|err| eyre!("add: {err}"))?;
    harness
        .workspace
        .drop_task(task.id(), Some(Quadrant::UrgentNotImportant))
        .map_err(|err| eyre!("drop: {err}"))?;
    harness
        .workspace
        .flush()
        .await
        .map_err(|err| eyre!("flush: {err}"))?;

    let snapshot = harness.snapshot()?;
    assert_eq!(
        snapshot.task(task.id()).map(|stored| stored.quadrant()),
        Some(Quadrant::UrgentNotImportant)
    );

    let created = harness
        .failures
        .try_recv()
        .map_err(|err| eyre!("expected a create failure: {err}"))?;
    let updated = harness
        .failures
        .try_recv()
        .map_err(|err| eyre!("expected an update failure: {err}"))?;
    assert!(matches!(created.command, PersistCommand::CreateTask { .. }));
    assert!(matches!(
        updated.command,
        PersistCommand::UpdateTask { task_id, .. } if task_id == task.id()
    ));
    assert!(matches!(
        created.error,
        PersistenceError::TaskStore(TaskStoreError::Persistence(_))
    ));
    assert!(harness.failures.try_recv().is_err());

    harness.workspace.shutdown().await;
    Ok(())
}
