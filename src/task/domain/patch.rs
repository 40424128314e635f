//! Partial update types for board tasks.
//!
//! [`TaskPatch`] is the only way callers edit task content. It deliberately
//! cannot express `order` or `quadrant`; those are owned by the ordering
//! engine. [`TaskChanges`] is the persistence-facing partial record that
//! also carries placement, progress, and timestamp updates.

use super::{Priority, Quadrant, Task, TaskStatus};
use crate::project::domain::MemberId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Update instruction for a single optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum PatchField<T> {
    /// Leave the field as it is.
    #[default]
    Keep,
    /// Replace the field with a new value.
    Set(T),
    /// Remove the field value.
    Clear,
}

impl<T> PatchField<T> {
    /// Returns `true` when the field is left untouched.
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    /// Applies the instruction to an optional slot.
    pub fn apply_to(self, slot: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Set(value) => *slot = Some(value),
            Self::Clear => *slot = None,
        }
    }

    /// Builds the instruction that turns `before` into `after`.
    #[must_use]
    pub fn diff(before: Option<&T>, after: Option<&T>) -> Self
    where
        T: PartialEq + Clone,
    {
        match (before, after) {
            (Some(old), Some(new)) if old == new => Self::Keep,
            (None, None) => Self::Keep,
            (_, Some(new)) => Self::Set(new.clone()),
            (Some(_), None) => Self::Clear,
        }
    }
}

/// Caller-supplied edit of a task's mutable content fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    title: Option<String>,
    #[serde(default)]
    description: PatchField<String>,
    #[serde(default)]
    assignee: PatchField<MemberId>,
    #[serde(default)]
    due_date: PatchField<NaiveDate>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = PatchField::Set(description.into());
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = PatchField::Clear;
        self
    }

    /// Assigns the task to a member.
    #[must_use]
    pub fn with_assignee(mut self, assignee: MemberId) -> Self {
        self.assignee = PatchField::Set(assignee);
        self
    }

    /// Removes the assignee.
    #[must_use]
    pub fn clear_assignee(mut self) -> Self {
        self.assignee = PatchField::Clear;
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = PatchField::Set(due_date);
        self
    }

    /// Removes the due date.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = PatchField::Clear;
        self
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description instruction.
    #[must_use]
    pub const fn description(&self) -> &PatchField<String> {
        &self.description
    }

    /// Returns the assignee instruction.
    #[must_use]
    pub const fn assignee(&self) -> &PatchField<MemberId> {
        &self.assignee
    }

    /// Returns the due date instruction.
    #[must_use]
    pub const fn due_date(&self) -> &PatchField<NaiveDate> {
        &self.due_date
    }

    /// Returns `true` when applying the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_keep()
            && self.assignee.is_keep()
            && self.due_date.is_keep()
    }
}

/// Partial task record sent to the persistence collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskChanges {
    /// Content field changes.
    pub patch: TaskPatch,
    /// New quadrant, if the task moved.
    pub quadrant: Option<Quadrant>,
    /// New order, if the task was re-ranked.
    pub order: Option<i64>,
    /// New status, if progress changed.
    pub status: Option<TaskStatus>,
    /// New priority, if it changed.
    pub priority: Option<Priority>,
    /// New change timestamp, if content or progress changed.
    pub updated_at: Option<DateTime<Utc>>,
}

impl TaskChanges {
    /// Wraps a content patch.
    #[must_use]
    pub const fn from_patch(patch: TaskPatch) -> Self {
        Self {
            patch,
            quadrant: None,
            order: None,
            status: None,
            priority: None,
            updated_at: None,
        }
    }

    /// Describes a placement change.
    #[must_use]
    pub fn placement(quadrant: Quadrant, order: i64) -> Self {
        Self {
            quadrant: Some(quadrant),
            order: Some(order),
            ..Self::default()
        }
    }

    /// Computes the changes turning `before` into `after`.
    ///
    /// Returns `None` when both records hold the same field values.
    #[must_use]
    pub fn between(before: &Task, after: &Task) -> Option<Self> {
        let title = (before.title() != after.title()).then(|| after.title().to_owned());
        let patch = TaskPatch {
            title,
            description: PatchField::diff(
                before.description_value(),
                after.description_value(),
            ),
            assignee: PatchField::diff(before.assignee().as_ref(), after.assignee().as_ref()),
            due_date: PatchField::diff(before.due_date().as_ref(), after.due_date().as_ref()),
        };
        let changes = Self {
            patch,
            quadrant: (before.quadrant() != after.quadrant()).then_some(after.quadrant()),
            order: (before.order() != after.order()).then_some(after.order()),
            status: (before.status() != after.status()).then_some(after.status()),
            priority: (before.priority() != after.priority()).then_some(after.priority()),
            updated_at: after
                .updated_at()
                .filter(|_| before.updated_at() != after.updated_at()),
        };
        (!changes.is_empty()).then_some(changes)
    }

    /// Returns `true` when no field changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.patch.is_empty()
            && self.quadrant.is_none()
            && self.order.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.updated_at.is_none()
    }
}
