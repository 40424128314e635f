//! Board task record and its construction rules.

use super::{
    PatchField, Priority, Quadrant, TaskChanges, TaskDomainError, TaskId, TaskPatch, TaskStatus,
};
use crate::project::domain::MemberId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Request payload for adding a task to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    quadrant: Quadrant,
    description: Option<String>,
    assignee: Option<MemberId>,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    priority: Priority,
}

impl NewTask {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, quadrant: Quadrant) -> Self {
        Self {
            title: title.into(),
            quadrant,
            description: None,
            assignee: None,
            due_date: None,
            status: TaskStatus::default(),
            priority: Priority::default(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: MemberId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the requested title as supplied.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the target quadrant.
    #[must_use]
    pub const fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Returns the requested description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the requested assignee.
    #[must_use]
    pub const fn assignee(&self) -> Option<MemberId> {
        self.assignee
    }

    /// Returns the requested due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the initial priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// A task placed on a project's Eisenhower board.
///
/// # Invariants
///
/// - `title` is trimmed and never empty
/// - `description`, when present, is trimmed and never empty
/// - `order` ranks the task among tasks sharing its quadrant; lower values
///   come first and values need not be contiguous
/// - `status` and `priority` never affect `quadrant` or `order`
/// - `updated_at` moves on content and progress changes, not on placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    quadrant: Quadrant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assignee: Option<MemberId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    status: TaskStatus,
    #[serde(default)]
    priority: Priority,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    order: i64,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted quadrant.
    pub quadrant: Quadrant,
    /// Persisted assignee, if any.
    pub assignee: Option<MemberId>,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted progress state.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last content change, if recorded.
    pub updated_at: Option<DateTime<Utc>>,
    /// Persisted rank within the quadrant.
    pub order: i64,
}

impl Task {
    /// Creates a new task at the given rank.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn create(
        request: NewTask,
        order: i64,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let now = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: normalized_title(&request.title)?,
            description: normalized_text(request.description),
            quadrant: request.quadrant,
            assignee: request.assignee,
            due_date: request.due_date,
            status: request.status,
            priority: request.priority,
            created_at: now,
            updated_at: Some(now),
            order,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            quadrant: data.quadrant,
            assignee: data.assignee,
            due_date: data.due_date,
            status: data.status,
            priority: data.priority,
            created_at: data.created_at,
            updated_at: data.updated_at,
            order: data.order,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) const fn description_value(&self) -> Option<&String> {
        self.description.as_ref()
    }

    /// Returns the quadrant the task occupies.
    #[must_use]
    pub const fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Returns the assigned member, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<MemberId> {
        self.assignee
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the progress state.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns `true` once the task is finished.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.status, TaskStatus::Done)
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the time of the last content or progress change.
    ///
    /// Records persisted before this was tracked return `None`.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns the rank within the quadrant.
    #[must_use]
    pub const fn order(&self) -> i64 {
        self.order
    }

    /// Moves the task to a quadrant at the given rank.
    pub(crate) const fn place(&mut self, quadrant: Quadrant, order: i64) {
        self.quadrant = quadrant;
        self.order = order;
    }

    /// Re-ranks the task within its quadrant.
    pub(crate) const fn set_order(&mut self, order: i64) {
        self.order = order;
    }

    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub(crate) const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub(crate) const fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    /// Merges a content patch into the task.
    ///
    /// The task is left untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the patch supplies a
    /// blank title.
    pub(crate) fn apply_patch(&mut self, patch: &TaskPatch) -> Result<(), TaskDomainError> {
        let title = patch.title().map(normalized_title).transpose()?;
        if let Some(new_title) = title {
            self.title = new_title;
        }
        match patch.description() {
            PatchField::Set(text) => self.description = normalized_text(Some(text.clone())),
            other => other.clone().apply_to(&mut self.description),
        }
        patch.assignee().clone().apply_to(&mut self.assignee);
        patch.due_date().clone().apply_to(&mut self.due_date);
        Ok(())
    }

    /// Applies a persistence partial, including placement fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the changes supply a
    /// blank title.
    pub fn apply_changes(&mut self, changes: &TaskChanges) -> Result<(), TaskDomainError> {
        self.apply_patch(&changes.patch)?;
        if let Some(quadrant) = changes.quadrant {
            self.quadrant = quadrant;
        }
        if let Some(order) = changes.order {
            self.order = order;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(updated_at) = changes.updated_at {
            self.updated_at = Some(updated_at);
        }
        Ok(())
    }
}

fn normalized_title(raw: &str) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}

fn normalized_text(raw: Option<String>) -> Option<String> {
    raw.map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
