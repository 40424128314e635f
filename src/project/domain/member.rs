//! Project membership.

use super::MemberId;
use crate::identity::domain::{EmailAddress, UserIdentity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of a project member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// Creator of the project; manages settings and membership.
    Owner,
    /// May edit the board and invite members.
    Editor,
    /// May only read.
    Viewer,
}

impl MemberRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }

    /// Returns `true` when the role may manage project settings.
    #[must_use]
    pub const fn can_manage_project(self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Returns `true` when the role may invite members.
    #[must_use]
    pub const fn can_invite(self) -> bool {
        matches!(self, Self::Owner | Self::Editor)
    }
}

impl TryFrom<&str> for MemberRole {
    type Error = String;

    /// Accepts `admin` as an editor and `member`/`guest` as viewers.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "owner" => Ok(Self::Owner),
            "editor" | "admin" => Ok(Self::Editor),
            "viewer" | "member" | "guest" => Ok(Self::Viewer),
            _ => Err(format!("unknown member role: {value}")),
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's membership in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    id: MemberId,
    email: EmailAddress,
    name: String,
    role: MemberRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
}

impl Member {
    /// Creates the owner membership for a signed-in user.
    #[must_use]
    pub fn owner(user: &UserIdentity) -> Self {
        Self {
            id: MemberId::from(user.id()),
            email: user.email().clone(),
            name: user.name().to_owned(),
            role: MemberRole::Owner,
            avatar_url: user.avatar_url().map(str::to_owned),
        }
    }

    /// Creates an invited membership.
    ///
    /// The display name is the email local part and the avatar is seeded
    /// from the address.
    #[must_use]
    pub fn invited(email: EmailAddress, role: MemberRole) -> Self {
        let name = email.local_part().to_owned();
        let avatar_url = format!("https://api.dicebear.com/7.x/avataaars/svg?seed={email}");
        Self {
            id: MemberId::new(),
            email,
            name,
            role,
            avatar_url: Some(avatar_url),
        }
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the member email.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the access level.
    #[must_use]
    pub const fn role(&self) -> MemberRole {
        self.role
    }

    /// Returns the avatar URL, if any.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub(crate) const fn set_role(&mut self, role: MemberRole) {
        self.role = role;
    }
}
