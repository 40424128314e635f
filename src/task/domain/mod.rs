//! Domain model for the Eisenhower task board.
//!
//! Tasks live in one of four quadrants and carry an integer `order` that
//! ranks them within that quadrant. Content edits go through [`TaskPatch`];
//! placement changes are owned by [`crate::task::ordering`].

mod error;
mod ids;
mod patch;
mod quadrant;
mod status;
mod task;
mod validation;

pub use error::{ErrorKind, NoOpReason, ParseQuadrantError, TaskDomainError};
pub use ids::TaskId;
pub use patch::{PatchField, TaskChanges, TaskPatch};
pub use quadrant::Quadrant;
pub use status::{Priority, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task};
pub use validation::TaskValidationConfig;
