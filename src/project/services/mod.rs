//! Application services for open projects.

mod dispatch;
mod workspace;

pub use dispatch::{
    DispatcherClosed, DispatcherConfig, PersistCommand, PersistenceDispatcher, PersistenceError,
    PersistenceFailure,
};
pub use workspace::{ProjectWorkspace, WorkspaceError, WorkspaceResult};
