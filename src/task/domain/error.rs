//! Error types for task board validation and ordering operations.

use super::TaskId;
use std::fmt;
use thiserror::Error;

/// Coarse classification shared by every board-facing error.
///
/// User interfaces map these onto messaging; persistence layers use
/// [`ErrorKind::NoOp`] to skip writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced task, member, or event does not exist.
    NotFound,
    /// A required field is empty or a value breaks a domain rule.
    Validation,
    /// The requested operation would not change anything.
    NoOp,
}

/// Why an operation was classified as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoOpReason {
    /// The task was dropped onto the quadrant it already occupies.
    SameQuadrant,
    /// The drag and hover tasks already share a position.
    SamePosition,
    /// The drag ended outside any valid drop target.
    DropCancelled,
    /// A rename supplied the current project name.
    UnchangedName,
    /// The task already has the requested status.
    UnchangedStatus,
    /// The task already has the requested priority.
    UnchangedPriority,
}

impl NoOpReason {
    /// Returns a short human-readable description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SameQuadrant => "task already in target quadrant",
            Self::SamePosition => "tasks already share a position",
            Self::DropCancelled => "drop outside any quadrant",
            Self::UnchangedName => "name unchanged",
            Self::UnchangedStatus => "status unchanged",
            Self::UnchangedPriority => "priority unchanged",
        }
    }
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by task construction, editing, and ordering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured length.
    #[error("task title has {actual} characters, exceeds limit of {max}")]
    TitleTooLong {
        /// Title length in characters.
        actual: usize,
        /// Maximum allowed characters.
        max: usize,
    },

    /// The task description exceeds the configured length.
    #[error("task description has {actual} characters, exceeds limit of {max}")]
    DescriptionTooLong {
        /// Description length in characters.
        actual: usize,
        /// Maximum allowed characters.
        max: usize,
    },

    /// The referenced task does not exist in the list.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The operation would leave the board unchanged.
    #[error("no-op: {0}")]
    NoOp(NoOpReason),
}

impl TaskDomainError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTitle | Self::TitleTooLong { .. } | Self::DescriptionTooLong { .. } => {
                ErrorKind::Validation
            }
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::NoOp(_) => ErrorKind::NoOp,
        }
    }
}

/// Error returned while parsing quadrant names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown quadrant: {0}")]
pub struct ParseQuadrantError(pub String);
