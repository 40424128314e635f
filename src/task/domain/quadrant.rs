//! Eisenhower matrix quadrants.

use super::ParseQuadrantError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four urgency/importance buckets of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    /// Urgent and important: do first.
    UrgentImportant,
    /// Important but not urgent: schedule.
    NotUrgentImportant,
    /// Urgent but not important: delegate.
    UrgentNotImportant,
    /// Neither urgent nor important: eliminate.
    NotUrgentNotImportant,
}

impl Quadrant {
    /// Every quadrant in board display order.
    pub const ALL: [Self; 4] = [
        Self::UrgentImportant,
        Self::NotUrgentImportant,
        Self::UrgentNotImportant,
        Self::NotUrgentNotImportant,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UrgentImportant => "urgent-important",
            Self::NotUrgentImportant => "not-urgent-important",
            Self::UrgentNotImportant => "urgent-not-important",
            Self::NotUrgentNotImportant => "not-urgent-not-important",
        }
    }

    /// Builds a quadrant from urgency and importance flags.
    #[must_use]
    pub const fn from_flags(urgent: bool, important: bool) -> Self {
        match (urgent, important) {
            (true, true) => Self::UrgentImportant,
            (false, true) => Self::NotUrgentImportant,
            (true, false) => Self::UrgentNotImportant,
            (false, false) => Self::NotUrgentNotImportant,
        }
    }

    /// Returns `true` for the two urgent quadrants.
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::UrgentImportant | Self::UrgentNotImportant)
    }

    /// Returns `true` for the two important quadrants.
    #[must_use]
    pub const fn is_important(self) -> bool {
        matches!(self, Self::UrgentImportant | Self::NotUrgentImportant)
    }

    /// Returns the board heading for the quadrant.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::UrgentImportant => "Urgent & Important",
            Self::NotUrgentImportant => "Not Urgent & Important",
            Self::UrgentNotImportant => "Urgent & Not Important",
            Self::NotUrgentNotImportant => "Not Urgent & Not Important",
        }
    }

    /// Returns the action the quadrant recommends.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::UrgentImportant => "Do First",
            Self::NotUrgentImportant => "Schedule",
            Self::UrgentNotImportant => "Delegate",
            Self::NotUrgentNotImportant => "Eliminate",
        }
    }
}

impl TryFrom<&str> for Quadrant {
    type Error = ParseQuadrantError;

    /// Accepts the board names and the older upper-snake matrix names.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "urgent-important" | "important-urgent" => Ok(Self::UrgentImportant),
            "not-urgent-important" | "important-not-urgent" => Ok(Self::NotUrgentImportant),
            "urgent-not-important" | "not-important-urgent" => Ok(Self::UrgentNotImportant),
            "not-urgent-not-important" | "not-important-not-urgent" => {
                Ok(Self::NotUrgentNotImportant)
            }
            _ => Err(ParseQuadrantError(value.to_owned())),
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
