//! Domain model for project workspaces.
//!
//! A [`Project`] is the aggregate root for one team workspace: its board
//! tasks, members, calendar events, and chat history. All changes produce a
//! new aggregate value that the caller hands to persistence as a whole.

mod error;
mod event;
mod ids;
mod member;
mod message;
mod name;
mod project;

pub use error::ProjectDomainError;
pub use event::{CalendarEvent, EventColor, NewEvent};
pub use ids::{EventId, MemberId, MessageId, ProjectId};
pub use member::{Member, MemberRole};
pub use message::{Attachment, ChatMessage, MessageKind};
pub use name::ProjectName;
pub use project::{PersistedProjectData, Project, ProjectResult, UNASSIGNED};
