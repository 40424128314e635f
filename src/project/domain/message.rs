//! Project chat messages.

use super::{Member, MemberId, MessageId, ProjectDomainError};
use crate::storage::domain::BlobUrl;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// File shared in the project chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Original file name.
    pub file_name: String,
    /// Size in bytes.
    pub file_size: u64,
    /// MIME type.
    pub file_type: String,
    /// Download URL in the blob store.
    pub file_url: BlobUrl,
}

/// Kind of chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain text from a member.
    Text,
    /// A shared file.
    File {
        /// The shared file.
        attachment: Attachment,
    },
    /// A notice generated by the application.
    System,
}

/// A message in the project chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    id: MessageId,
    sender_id: MemberId,
    sender_name: String,
    content: String,
    sent_at: DateTime<Utc>,
    kind: MessageKind,
}

impl ChatMessage {
    /// Creates a text message from a member.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyMessage`] for blank content.
    pub fn text(
        sender: &Member,
        content: &str,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ProjectDomainError::EmptyMessage);
        }
        Ok(Self::build(sender, trimmed.to_owned(), MessageKind::Text, clock))
    }

    /// Creates a file message from a member.
    ///
    /// The content is the file name.
    #[must_use]
    pub fn file(sender: &Member, attachment: Attachment, clock: &impl Clock) -> Self {
        let content = attachment.file_name.clone();
        Self::build(sender, content, MessageKind::File { attachment }, clock)
    }

    /// Creates a system notice attributed to a member.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyMessage`] for blank content.
    pub fn system(
        sender: &Member,
        content: &str,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ProjectDomainError::EmptyMessage);
        }
        Ok(Self::build(sender, trimmed.to_owned(), MessageKind::System, clock))
    }

    fn build(sender: &Member, content: String, kind: MessageKind, clock: &impl Clock) -> Self {
        Self {
            id: MessageId::new(),
            sender_id: sender.id(),
            sender_name: sender.name().to_owned(),
            content,
            sent_at: clock.utc(),
            kind,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the sending member.
    #[must_use]
    pub const fn sender_id(&self) -> MemberId {
        self.sender_id
    }

    /// Returns the sender's display name at sending time.
    #[must_use]
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the message was sent.
    #[must_use]
    pub const fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }

    /// Returns the message kind.
    #[must_use]
    pub const fn kind(&self) -> &MessageKind {
        &self.kind
    }
}
