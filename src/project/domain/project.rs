//! Project aggregate root.

use super::{
    Attachment, CalendarEvent, ChatMessage, EventId, Member, MemberId, MemberRole, NewEvent,
    ProjectDomainError, ProjectId, ProjectName,
};
use crate::identity::domain::{EmailAddress, UserIdentity};
use crate::task::domain::{
    NewTask, PatchField, Priority, Quadrant, Task, TaskId, TaskPatch, TaskStatus,
};
use crate::task::ordering::{self, DragGesture};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Display name used for tasks without a (current) assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// Result type for project aggregate operations.
pub type ProjectResult<T> = Result<T, ProjectDomainError>;

/// A team workspace owning its board tasks, members, calendar, and chat.
///
/// Every operation returns a new `Project`; a value is never changed in
/// place, so readers holding a snapshot always see a consistent state.
///
/// # Invariants
///
/// - the creator is the only member created with [`MemberRole::Owner`]
/// - tasks belong to exactly this project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    tasks: Vec<Task>,
    members: Vec<Member>,
    events: Vec<CalendarEvent>,
    messages: Vec<ChatMessage>,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: ProjectName,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted tasks.
    pub tasks: Vec<Task>,
    /// Persisted members.
    pub members: Vec<Member>,
    /// Persisted calendar events.
    pub events: Vec<CalendarEvent>,
    /// Persisted chat messages.
    pub messages: Vec<ChatMessage>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest write timestamp, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Creates a project owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] for a blank name.
    pub fn create(
        name: &str,
        owner: &UserIdentity,
        clock: &impl Clock,
    ) -> ProjectResult<Self> {
        Ok(Self {
            id: ProjectId::new(),
            name: ProjectName::new(name)?,
            description: None,
            tasks: Vec::new(),
            members: vec![Member::owner(owner)],
            events: Vec::new(),
            messages: Vec::new(),
            created_at: clock.utc(),
            updated_at: None,
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            tasks: data.tasks,
            members: data.members,
            events: data.events,
            messages: data.messages,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns every board task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns every member.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns every calendar event.
    #[must_use]
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Returns the chat history in sending order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest persisted write timestamp, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Looks up a task.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns a quadrant's tasks in display order.
    #[must_use]
    pub fn quadrant_tasks(&self, quadrant: Quadrant) -> Vec<&Task> {
        ordering::quadrant_tasks(&self.tasks, quadrant)
    }

    /// Looks up a member.
    #[must_use]
    pub fn member(&self, member_id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id() == member_id)
    }

    /// Returns the owner, if the membership list has one.
    #[must_use]
    pub fn owner(&self) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.role() == MemberRole::Owner)
    }

    /// Returns the display name of a task's assignee.
    ///
    /// Unknown or removed members render as [`UNASSIGNED`].
    #[must_use]
    pub fn assignee_name(&self, task: &Task) -> &str {
        task.assignee()
            .and_then(|id| self.member(id))
            .map_or(UNASSIGNED, Member::name)
    }

    /// Returns the events scheduled on a date.
    #[must_use]
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|event| event.date() == date)
            .collect()
    }

    /// Returns the share of tasks marked done, as a whole percentage.
    ///
    /// The value rounds down and is `0` for a project without tasks.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let done = self.tasks.iter().filter(|task| task.is_done()).count();
        done.saturating_mul(100)
            .checked_div(self.tasks.len())
            .map_or(0, |percent| u8::try_from(percent).unwrap_or(100))
    }

    /// Returns the tasks due on a date.
    #[must_use]
    pub fn tasks_due_on(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.due_date() == Some(date))
            .collect()
    }

    // ── Board ───────────────────────────────────────────────────────────

    /// Adds a task ranked last in its quadrant.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::MemberNotFound`] when the assignee is
    /// not a member, or a wrapped [`crate::task::domain::TaskDomainError`]
    /// for a blank title.
    pub fn with_task_added(
        &self,
        request: NewTask,
        clock: &impl Clock,
    ) -> ProjectResult<(Self, Task)> {
        if let Some(assignee) = request.assignee() {
            self.require_member(assignee)?;
        }
        let task = ordering::create_task(&self.tasks, request, clock)?;
        let mut tasks = self.tasks.clone();
        tasks.push(task.clone());
        Ok((self.with_tasks(tasks), task))
    }

    /// Edits a task's content fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::MemberNotFound`] when the patch assigns
    /// a non-member, or a wrapped task error for an unknown task or blank
    /// title.
    pub fn with_task_edited(
        &self,
        task_id: TaskId,
        patch: &TaskPatch,
        clock: &impl Clock,
    ) -> ProjectResult<Self> {
        if let PatchField::Set(assignee) = patch.assignee() {
            self.require_member(*assignee)?;
        }
        let tasks = ordering::edit_task(&self.tasks, task_id, patch, clock)?;
        Ok(self.with_tasks(tasks))
    }

    /// Sets a task's progress state.
    ///
    /// # Errors
    ///
    /// Returns a wrapped task `NotFound` error for an unknown task and `NoOp`
    /// when the status is unchanged.
    pub fn with_task_status(
        &self,
        task_id: TaskId,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> ProjectResult<Self> {
        let tasks = ordering::set_status(&self.tasks, task_id, status, clock)?;
        Ok(self.with_tasks(tasks))
    }

    /// Sets a task's priority.
    ///
    /// # Errors
    ///
    /// Returns a wrapped task `NotFound` error for an unknown task and `NoOp`
    /// when the priority is unchanged.
    pub fn with_task_priority(
        &self,
        task_id: TaskId,
        priority: Priority,
        clock: &impl Clock,
    ) -> ProjectResult<Self> {
        let tasks = ordering::set_priority(&self.tasks, task_id, priority, clock)?;
        Ok(self.with_tasks(tasks))
    }

    /// Deletes a task without renumbering the rest.
    ///
    /// # Errors
    ///
    /// Returns a wrapped task `NotFound` error for an unknown task.
    pub fn with_task_deleted(&self, task_id: TaskId) -> ProjectResult<Self> {
        let tasks = ordering::delete_task(&self.tasks, task_id)?;
        Ok(self.with_tasks(tasks))
    }

    /// Moves a task to another quadrant.
    ///
    /// # Errors
    ///
    /// Returns a wrapped task `NotFound` error for an unknown task.
    pub fn with_task_moved(&self, task_id: TaskId, quadrant: Quadrant) -> ProjectResult<Self> {
        let tasks = ordering::assign_to_quadrant(&self.tasks, task_id, quadrant)?;
        Ok(self.with_tasks(tasks))
    }

    /// Reorders two tasks within a quadrant.
    ///
    /// # Errors
    ///
    /// Returns a wrapped task `NotFound` error for an unknown task.
    pub fn with_tasks_reordered(&self, drag_id: TaskId, hover_id: TaskId) -> ProjectResult<Self> {
        let tasks = ordering::reorder(&self.tasks, drag_id, hover_id)?;
        Ok(self.with_tasks(tasks))
    }

    /// Applies a board drag gesture.
    ///
    /// # Errors
    ///
    /// Returns a wrapped task error, including `NoOp` when the gesture
    /// changes nothing.
    pub fn with_gesture(&self, gesture: DragGesture) -> ProjectResult<Self> {
        let tasks = ordering::apply_gesture(&self.tasks, gesture)?;
        Ok(self.with_tasks(tasks))
    }

    // ── Settings and membership ─────────────────────────────────────────

    /// Renames the project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] for a blank name and
    /// [`ProjectDomainError::UnchangedName`] when the name is unchanged.
    pub fn renamed(&self, name: &str) -> ProjectResult<Self> {
        let normalized = ProjectName::new(name)?;
        if normalized == self.name {
            return Err(ProjectDomainError::UnchangedName);
        }
        let mut next = self.clone();
        next.name = normalized;
        Ok(next)
    }

    /// Sets or clears the description.
    #[must_use]
    pub fn with_description(&self, description: Option<&str>) -> Self {
        let mut next = self.clone();
        next.description = description
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        next
    }

    /// Invites a member by email.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::Identity`] for a malformed address,
    /// [`ProjectDomainError::OwnerInvite`] when inviting as owner, or
    /// [`ProjectDomainError::DuplicateMember`] when the address is already
    /// a member.
    pub fn with_member_invited(
        &self,
        email: &str,
        role: MemberRole,
    ) -> ProjectResult<(Self, Member)> {
        let address = EmailAddress::new(email)?;
        if role == MemberRole::Owner {
            return Err(ProjectDomainError::OwnerInvite);
        }
        if self.members.iter().any(|member| member.email() == &address) {
            return Err(ProjectDomainError::DuplicateMember(address));
        }

        let member = Member::invited(address, role);
        let mut next = self.clone();
        next.members.push(member.clone());
        Ok((next, member))
    }

    /// Changes a member's role.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::MemberNotFound`] for an unknown member,
    /// [`ProjectDomainError::OwnerRoleFixed`] for the owner, or
    /// [`ProjectDomainError::SecondOwner`] when promoting to owner.
    pub fn with_member_role(&self, member_id: MemberId, role: MemberRole) -> ProjectResult<Self> {
        let current = self.require_member(member_id)?;
        if current.role() == MemberRole::Owner {
            return Err(ProjectDomainError::OwnerRoleFixed(member_id));
        }
        if role == MemberRole::Owner {
            return Err(ProjectDomainError::SecondOwner);
        }

        let mut next = self.clone();
        next.members
            .iter_mut()
            .filter(|member| member.id() == member_id)
            .for_each(|member| member.set_role(role));
        Ok(next)
    }

    /// Removes a member. Tasks assigned to them keep the dangling reference.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::MemberNotFound`] for an unknown member
    /// or [`ProjectDomainError::CannotRemoveOwner`] for the owner.
    pub fn without_member(&self, member_id: MemberId) -> ProjectResult<Self> {
        if self.require_member(member_id)?.role() == MemberRole::Owner {
            return Err(ProjectDomainError::CannotRemoveOwner(member_id));
        }
        let mut next = self.clone();
        next.members.retain(|member| member.id() != member_id);
        Ok(next)
    }

    // ── Calendar ────────────────────────────────────────────────────────

    /// Schedules a calendar event.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyEventTitle`] for a blank title.
    pub fn with_event(&self, request: NewEvent) -> ProjectResult<(Self, CalendarEvent)> {
        let event = CalendarEvent::create(request)?;
        let mut next = self.clone();
        next.events.push(event.clone());
        Ok((next, event))
    }

    /// Removes a calendar event.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EventNotFound`] for an unknown event.
    pub fn without_event(&self, event_id: EventId) -> ProjectResult<Self> {
        if !self.events.iter().any(|event| event.id() == event_id) {
            return Err(ProjectDomainError::EventNotFound(event_id));
        }
        let mut next = self.clone();
        next.events.retain(|event| event.id() != event_id);
        Ok(next)
    }

    // ── Chat ────────────────────────────────────────────────────────────

    /// Posts a text message.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::MemberNotFound`] when the sender is not
    /// a member or [`ProjectDomainError::EmptyMessage`] for blank content.
    pub fn with_message(
        &self,
        sender_id: MemberId,
        content: &str,
        clock: &impl Clock,
    ) -> ProjectResult<(Self, ChatMessage)> {
        let message = ChatMessage::text(self.require_member(sender_id)?, content, clock)?;
        Ok(self.with_appended_message(message))
    }

    /// Posts a shared file.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::MemberNotFound`] when the sender is not
    /// a member.
    pub fn with_attachment(
        &self,
        sender_id: MemberId,
        attachment: Attachment,
        clock: &impl Clock,
    ) -> ProjectResult<(Self, ChatMessage)> {
        let message = ChatMessage::file(self.require_member(sender_id)?, attachment, clock);
        Ok(self.with_appended_message(message))
    }

    pub(crate) fn with_updated_at(&self, updated_at: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        next.updated_at = Some(updated_at);
        next
    }

    fn with_appended_message(&self, message: ChatMessage) -> (Self, ChatMessage) {
        let mut next = self.clone();
        next.messages.push(message.clone());
        (next, message)
    }

    fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        let mut next = self.clone();
        next.tasks = tasks;
        next
    }

    fn require_member(&self, member_id: MemberId) -> ProjectResult<&Member> {
        self.member(member_id)
            .ok_or(ProjectDomainError::MemberNotFound(member_id))
    }
}
