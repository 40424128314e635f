//! Shared world state for board ordering BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use eyre::eyre;
use mockable::DefaultClock;
use rstest::fixture;
use taskmatrix::project::{
    adapters::memory::InMemoryProjectRepository,
    services::{
        DispatcherConfig, PersistenceDispatcher, PersistenceFailure, ProjectWorkspace,
        WorkspaceError,
    },
};
use taskmatrix::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Quadrant, TaskId},
};
use tokio::sync::mpsc;

/// Workspace type used by the BDD world.
pub type TestWorkspace = ProjectWorkspace<DefaultClock>;

/// Scenario world for board ordering behaviour tests.
pub struct BoardWorld {
    /// Task store mirrored by the workspace.
    pub tasks: Arc<InMemoryTaskStore>,
    /// Project repository mirrored by the workspace.
    pub projects: Arc<InMemoryProjectRepository<DefaultClock>>,
    /// Workspace opened by the `Given` step.
    pub workspace: Option<TestWorkspace>,
    /// Task ids keyed by title.
    pub task_ids: HashMap<String, TaskId>,
    /// Error returned by the last gesture.
    pub last_error: Option<WorkspaceError>,
    /// Keeps the dispatcher's failure channel open.
    pub failures: Option<mpsc::Receiver<PersistenceFailure>>,
}

impl BoardWorld {
    /// Creates a world with no open project.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(InMemoryTaskStore::new()),
            projects: Arc::new(InMemoryProjectRepository::new(Arc::new(DefaultClock))),
            workspace: None,
            task_ids: HashMap::new(),
            last_error: None,
            failures: None,
        }
    }

    /// Spawns a dispatcher over the world's stores.
    pub fn spawn_dispatcher(&mut self) -> PersistenceDispatcher {
        let (dispatcher, failures) = PersistenceDispatcher::spawn(
            Arc::clone(&self.tasks),
            Arc::clone(&self.projects),
            DispatcherConfig::default(),
        );
        self.failures = Some(failures);
        dispatcher
    }

    /// Returns the open workspace.
    pub fn workspace(&self) -> eyre::Result<&TestWorkspace> {
        self.workspace
            .as_ref()
            .ok_or_else(|| eyre!("no project opened in scenario world"))
    }

    /// Looks up a task id by title.
    pub fn task_id(&self, title: &str) -> eyre::Result<TaskId> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre!("no task titled '{title}' in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a quadrant name used in feature files.
pub fn quadrant(name: &str) -> eyre::Result<Quadrant> {
    Quadrant::try_from(name).map_err(|err| eyre!("{err}"))
}
