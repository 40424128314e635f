//! Error types for project aggregate operations.

use super::{EventId, MemberId};
use crate::identity::domain::{EmailAddress, IdentityError};
use crate::task::domain::{ErrorKind, NoOpReason, TaskDomainError};
use thiserror::Error;

/// Errors returned by project aggregate operations.
#[derive(Debug, Clone, Error)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyName,

    /// The calendar event title is empty after trimming.
    #[error("event title must not be empty")]
    EmptyEventTitle,

    /// The chat message content is empty after trimming.
    #[error("message content must not be empty")]
    EmptyMessage,

    /// A member with the email address already belongs to the project.
    #[error("user is already a member of this project: {0}")]
    DuplicateMember(EmailAddress),

    /// Invitations may not grant ownership.
    #[error("members cannot be invited as owner")]
    OwnerInvite,

    /// The project already has an owner.
    #[error("project already has an owner")]
    SecondOwner,

    /// The owner's role cannot change.
    #[error("the project owner's role cannot change: {0}")]
    OwnerRoleFixed(MemberId),

    /// The owner cannot be removed.
    #[error("cannot remove project owner: {0}")]
    CannotRemoveOwner(MemberId),

    /// The referenced member does not exist.
    #[error("member not found: {0}")]
    MemberNotFound(MemberId),

    /// The referenced event does not exist.
    #[error("event not found: {0}")]
    EventNotFound(EventId),

    /// The project rename supplied the current name.
    #[error("project name unchanged")]
    UnchangedName,

    /// An email address failed validation.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// A task board operation failed.
    #[error(transparent)]
    Task(#[from] TaskDomainError),
}

impl ProjectDomainError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MemberNotFound(_) | Self::EventNotFound(_) => ErrorKind::NotFound,
            Self::UnchangedName => ErrorKind::NoOp,
            Self::Task(err) => err.kind(),
            Self::EmptyName
            | Self::EmptyEventTitle
            | Self::EmptyMessage
            | Self::DuplicateMember(_)
            | Self::OwnerInvite
            | Self::SecondOwner
            | Self::OwnerRoleFixed(_)
            | Self::CannotRemoveOwner(_)
            | Self::Identity(_) => ErrorKind::Validation,
        }
    }

    /// Returns the no-op reason when the error is a no-op.
    #[must_use]
    pub const fn no_op_reason(&self) -> Option<NoOpReason> {
        match self {
            Self::UnchangedName => Some(NoOpReason::UnchangedName),
            Self::Task(TaskDomainError::NoOp(reason)) => Some(*reason),
            _ => None,
        }
    }
}
