//! Shared harness for in-memory workspace tests.

use std::sync::Arc;

use eyre::{WrapErr, eyre};
use mockable::DefaultClock;
use taskmatrix::config::AppConfig;
use taskmatrix::identity::{
    adapters::memory::InMemoryIdentityProvider, domain::UserIdentity, ports::IdentityProvider,
};
use taskmatrix::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{Project, ProjectId},
    ports::ProjectRepository,
    services::{PersistenceDispatcher, PersistenceFailure, ProjectWorkspace},
};
use taskmatrix::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskChanges, TaskId},
    ports::{TaskStore, TaskStoreError},
};
use tokio::sync::mpsc;

/// Repository type used by the harness.
pub type TestRepository = InMemoryProjectRepository<DefaultClock>;

/// A workspace wired to in-memory stores.
pub struct Harness<S = InMemoryTaskStore> {
    /// Workspace under test.
    pub workspace: ProjectWorkspace<DefaultClock>,
    /// Task store mirrored by the workspace.
    pub tasks: Arc<S>,
    /// Project repository mirrored by the workspace.
    pub projects: Arc<TestRepository>,
    /// Failure channel of the dispatcher.
    pub failures: mpsc::Receiver<PersistenceFailure>,
    /// The signed-in project owner.
    pub owner: UserIdentity,
}

impl<S> Harness<S>
where
    S: TaskStore,
{
    /// Returns the open project's identifier.
    pub fn project_id(&self) -> eyre::Result<ProjectId> {
        Ok(self.snapshot()?.id())
    }

    /// Returns the current project snapshot.
    pub fn snapshot(&self) -> eyre::Result<Arc<Project>> {
        self.workspace
            .snapshot()
            .map_err(|err| eyre!("snapshot failed: {err}"))
    }

    /// Waits for queued writes and returns the stored tasks sorted by id.
    pub async fn stored_tasks(&self) -> eyre::Result<Vec<Task>> {
        self.workspace
            .flush()
            .await
            .map_err(|err| eyre!("flush failed: {err}"))?;
        let mut stored = self
            .tasks
            .list_tasks(self.project_id()?)
            .await
            .wrap_err("list stored tasks")?;
        stored.sort_by_key(Task::id);
        Ok(stored)
    }

    /// Returns the snapshot's tasks sorted by id.
    pub fn board_tasks(&self) -> eyre::Result<Vec<Task>> {
        let mut tasks = self.snapshot()?.tasks().to_vec();
        tasks.sort_by_key(Task::id);
        Ok(tasks)
    }
}

/// Signs up an owner, creates a project, and opens a workspace on it.
pub async fn open_board(name: &str) -> eyre::Result<Harness> {
    open_board_with(name, Arc::new(InMemoryTaskStore::new())).await
}

/// Opens a workspace whose task writes go to `tasks`.
pub async fn open_board_with<S>(name: &str, tasks: Arc<S>) -> eyre::Result<Harness<S>>
where
    S: TaskStore + 'static,
{
    let config = AppConfig::default();
    let identity = InMemoryIdentityProvider::new();
    let owner = identity
        .sign_up("olive@example.com", "correct horse", "Olive Owner")
        .await
        .wrap_err("sign up owner")?;
    let project = Project::create(name, &owner, &DefaultClock).wrap_err("create project")?;

    let projects = Arc::new(InMemoryProjectRepository::new(Arc::new(DefaultClock)));
    projects
        .replace(&project)
        .await
        .wrap_err("store new project")?;
    let (dispatcher, failures) =
        PersistenceDispatcher::spawn(Arc::clone(&tasks), Arc::clone(&projects), config.dispatcher);
    let workspace = ProjectWorkspace::new(
        project,
        Arc::new(DefaultClock),
        config.validation,
        dispatcher,
    );

    Ok(Harness {
        workspace,
        tasks,
        projects,
        failures,
        owner,
    })
}

/// Task store that rejects every write.
#[derive(Debug, Default)]
pub struct OfflineTaskStore;

#[async_trait::async_trait]
impl TaskStore for OfflineTaskStore {
    async fn list_tasks(&self, _project_id: ProjectId) -> Result<Vec<Task>, TaskStoreError> {
        Err(offline())
    }

    async fn create_task(
        &self,
        _project_id: ProjectId,
        _task: &Task,
    ) -> Result<Task, TaskStoreError> {
        Err(offline())
    }

    async fn update_task(
        &self,
        _task_id: TaskId,
        _changes: &TaskChanges,
    ) -> Result<Task, TaskStoreError> {
        Err(offline())
    }

    async fn delete_task(
        &self,
        _task_id: TaskId,
    ) -> Result<(), TaskStoreError> {
        Err(offline())
    }
}

fn offline() -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other("task store offline"))
}
