//! Identifier newtypes for the project aggregate.
//!
//! These types wrap UUIDs to prevent accidental mixing of project, member,
//! event, and message identifiers.

use crate::identity::domain::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            #[doc = concat!("Creates a new random ", $label, " identifier.")]
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[doc = concat!("Creates a ", $label, " identifier from an existing UUID.")]
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_identifier!(
    /// Unique identifier for a project workspace.
    ProjectId,
    "project"
);

uuid_identifier!(
    /// Unique identifier for a project member.
    ///
    /// Members created from a signed-in user reuse the user's identifier.
    MemberId,
    "member"
);

uuid_identifier!(
    /// Unique identifier for a calendar event.
    EventId,
    "event"
);

uuid_identifier!(
    /// Unique identifier for a chat message.
    MessageId,
    "message"
);

impl From<UserId> for MemberId {
    fn from(value: UserId) -> Self {
        Self::from_uuid(value.into_inner())
    }
}
