//! Fire-and-forget persistence queue.
//!
//! Workspace commands compute the new project state synchronously and hand
//! the resulting writes to a [`PersistenceDispatcher`]. A single background
//! task drains the queue in FIFO order, so writes issued for one project land
//! in the order the commands ran. Failures never reach the caller of the
//! command; they are logged and published on the failure channel returned by
//! [`PersistenceDispatcher::spawn`]. Each command runs on its own tokio task,
//! so a store that panics fails that one write and the worker keeps going.

use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{Task, TaskChanges, TaskId},
    ports::{TaskStore, TaskStoreError},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Settings for the persistence dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Number of undelivered failures buffered before new ones are dropped.
    pub failure_capacity: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            failure_capacity: 64,
        }
    }
}

/// A write issued against the external stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistCommand {
    /// Store a newly created task.
    CreateTask {
        /// Owning project.
        project_id: ProjectId,
        /// Task to store.
        task: Task,
    },
    /// Merge a partial record into a stored task.
    UpdateTask {
        /// Task to update.
        task_id: TaskId,
        /// Fields to merge.
        changes: TaskChanges,
    },
    /// Delete a stored task.
    DeleteTask {
        /// Task to delete.
        task_id: TaskId,
    },
    /// Replace the whole project document.
    ReplaceProject {
        /// New project state.
        project: Box<Project>,
    },
}

impl PersistCommand {
    /// Returns a short operation label for logs.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::CreateTask { .. } => "create_task",
            Self::UpdateTask { .. } => "update_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::ReplaceProject { .. } => "replace_project",
        }
    }
}

/// Error raised by a store while executing a [`PersistCommand`].
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The task store rejected the write.
    #[error(transparent)]
    TaskStore(#[from] TaskStoreError),
    /// The project repository rejected the write.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),
    /// The store panicked while executing the write.
    #[error("persistence command panicked: {0}")]
    Panicked(String),
}

/// A failed write, published on the failure channel.
#[derive(Debug, Clone)]
pub struct PersistenceFailure {
    /// The command that failed.
    pub command: PersistCommand,
    /// Why it failed.
    pub error: PersistenceError,
}

enum Envelope {
    Command(PersistCommand),
    Flush(oneshot::Sender<()>),
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command(command) => f.debug_tuple("Command").field(command).finish(),
            Self::Flush(_) => f.write_str("Flush"),
        }
    }
}

/// Error returned when the dispatcher queue is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("persistence dispatcher is closed")]
pub struct DispatcherClosed;

/// Handle to the background persistence queue.
#[derive(Debug)]
pub struct PersistenceDispatcher {
    queue: mpsc::UnboundedSender<Envelope>,
    worker: JoinHandle<()>,
}

impl PersistenceDispatcher {
    /// Spawns the background worker on the current tokio runtime.
    ///
    /// Returns the dispatcher handle and the receiving end of the failure
    /// channel.
    #[must_use]
    pub fn spawn<S, R>(
        tasks: Arc<S>,
        projects: Arc<R>,
        config: DispatcherConfig,
    ) -> (Self, mpsc::Receiver<PersistenceFailure>)
    where
        S: TaskStore + ?Sized + 'static,
        R: ProjectRepository + ?Sized + 'static,
    {
        let (queue, commands) = mpsc::unbounded_channel();
        let (failures, failure_rx) = mpsc::channel(config.failure_capacity.max(1));
        let worker = tokio::spawn(drain(commands, tasks, projects, failures));
        (Self { queue, worker }, failure_rx)
    }

    /// Enqueues a write without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`DispatcherClosed`] when the worker has stopped.
    pub fn dispatch(&self, command: PersistCommand) -> Result<(), DispatcherClosed> {
        debug!(operation = command.operation(), "persistence command queued");
        self.queue
            .send(Envelope::Command(command))
            .map_err(|_| DispatcherClosed)
    }

    /// Returns `true` once the worker no longer accepts commands.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.queue.is_closed()
    }

    /// Waits until every command enqueued before this call has run.
    ///
    /// # Errors
    ///
    /// Returns [`DispatcherClosed`] when the worker has stopped.
    pub async fn flush(&self) -> Result<(), DispatcherClosed> {
        let (done, barrier) = oneshot::channel();
        self.queue
            .send(Envelope::Flush(done))
            .map_err(|_| DispatcherClosed)?;
        barrier.await.map_err(|_| DispatcherClosed)
    }

    /// Closes the queue and waits for pending commands to finish.
    pub async fn shutdown(self) {
        let Self { queue, worker } = self;
        drop(queue);
        if let Err(err) = worker.await {
            warn!(error = %err, "persistence dispatcher worker ended abnormally");
        }
    }
}

async fn drain<S, R>(
    mut commands: mpsc::UnboundedReceiver<Envelope>,
    tasks: Arc<S>,
    projects: Arc<R>,
    failures: mpsc::Sender<PersistenceFailure>,
) where
    S: TaskStore + ?Sized + 'static,
    R: ProjectRepository + ?Sized + 'static,
{
    info!("persistence dispatcher started");
    while let Some(envelope) = commands.recv().await {
        match envelope {
            Envelope::Flush(done) => {
                if done.send(()).is_err() {
                    debug!("flush waiter dropped before completion");
                }
            }
            Envelope::Command(command) => {
                if let Err(error) = execute_isolated(&command, &tasks, &projects).await {
                    warn!(
                        operation = command.operation(),
                        error = %error,
                        "persistence command failed"
                    );
                    publish(&failures, PersistenceFailure { command, error });
                }
            }
        }
    }
    info!("persistence dispatcher stopped");
}

/// Runs one command on a separate task and reports a panic as a failure.
async fn execute_isolated<S, R>(
    command: &PersistCommand,
    tasks: &Arc<S>,
    projects: &Arc<R>,
) -> Result<(), PersistenceError>
where
    S: TaskStore + ?Sized + 'static,
    R: ProjectRepository + ?Sized + 'static,
{
    let owned = command.clone();
    let task_store = Arc::clone(tasks);
    let repository = Arc::clone(projects);
    tokio::spawn(async move { execute(&owned, task_store.as_ref(), repository.as_ref()).await })
        .await
        .unwrap_or_else(|err| Err(PersistenceError::Panicked(err.to_string())))
}

async fn execute<S, R>(
    command: &PersistCommand,
    tasks: &S,
    projects: &R,
) -> Result<(), PersistenceError>
where
    S: TaskStore + ?Sized,
    R: ProjectRepository + ?Sized,
{
    match command {
        PersistCommand::CreateTask { project_id, task } => {
            tasks.create_task(*project_id, task).await?;
        }
        PersistCommand::UpdateTask { task_id, changes } => {
            tasks.update_task(*task_id, changes).await?;
        }
        PersistCommand::DeleteTask { task_id } => {
            tasks.delete_task(*task_id).await?;
        }
        PersistCommand::ReplaceProject { project } => {
            projects.replace(project).await?;
        }
    }
    Ok(())
}

fn publish(failures: &mpsc::Sender<PersistenceFailure>, failure: PersistenceFailure) {
    if let Err(err) = failures.try_send(failure) {
        warn!(error = %err, "persistence failure dropped");
    }
}
