//! Application state for one open project.

use super::dispatch::{DispatcherClosed, PersistCommand, PersistenceDispatcher};
use crate::project::domain::{
    Attachment, CalendarEvent, ChatMessage, EventId, Member, MemberId, MemberRole, NewEvent,
    Project, ProjectDomainError,
};
use crate::storage::{
    domain::{BlobPath, BlobStoreError},
    ports::BlobStore,
};
use crate::task::{
    domain::{
        ErrorKind, NewTask, NoOpReason, Priority, Quadrant, Task, TaskDomainError, TaskId,
        TaskPatch, TaskStatus, TaskValidationConfig,
    },
    ordering::{self, DragGesture},
};
use mockable::Clock;
use std::collections::HashSet;
use std::iter;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

/// Errors returned by workspace commands.
#[derive(Debug, Clone, Error)]
pub enum WorkspaceError {
    /// The project aggregate rejected the command.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// The blob store rejected an upload.
    #[error(transparent)]
    Storage(#[from] BlobStoreError),
    /// The persistence queue has stopped.
    #[error(transparent)]
    Closed(#[from] DispatcherClosed),
    /// A previous command panicked while holding the state lock.
    #[error("workspace state lock poisoned")]
    StatePoisoned,
}

impl WorkspaceError {
    /// Returns the error classification for domain failures.
    ///
    /// Infrastructure failures have no classification and return `None`.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Domain(err) => Some(err.kind()),
            Self::Storage(BlobStoreError::InvalidPath(_)) => Some(ErrorKind::Validation),
            Self::Storage(BlobStoreError::NotFound(_)) => Some(ErrorKind::NotFound),
            Self::Storage(BlobStoreError::Persistence(_)) | Self::Closed(_) | Self::StatePoisoned => {
                None
            }
        }
    }

    /// Returns the no-op reason when the command changed nothing.
    #[must_use]
    pub const fn no_op_reason(&self) -> Option<NoOpReason> {
        match self {
            Self::Domain(err) => err.no_op_reason(),
            Self::Storage(_) | Self::Closed(_) | Self::StatePoisoned => None,
        }
    }
}

/// Result type for workspace commands.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Explicit application state for an open project.
///
/// Commands compute the next [`Project`] synchronously, swap the shared
/// snapshot, and queue the writes that mirror the change. They return as soon
/// as the writes are queued; persistence failures surface on the dispatcher's
/// failure channel.
///
/// A command's result always matches the snapshot: once the queue has
/// stopped, commands fail with [`WorkspaceError::Closed`] before anything is
/// committed.
#[derive(Debug)]
pub struct ProjectWorkspace<C> {
    project: RwLock<Arc<Project>>,
    clock: Arc<C>,
    validation: TaskValidationConfig,
    dispatcher: PersistenceDispatcher,
}

impl<C> ProjectWorkspace<C>
where
    C: Clock + Send + Sync,
{
    /// Opens a workspace over a loaded project.
    #[must_use]
    pub fn new(
        project: Project,
        clock: Arc<C>,
        validation: TaskValidationConfig,
        dispatcher: PersistenceDispatcher,
    ) -> Self {
        Self {
            project: RwLock::new(Arc::new(project)),
            clock,
            validation,
            dispatcher,
        }
    }

    /// Returns the current project snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::StatePoisoned`] when the state lock is
    /// poisoned.
    pub fn snapshot(&self) -> WorkspaceResult<Arc<Project>> {
        let current = self
            .project
            .read()
            .map_err(|_| WorkspaceError::StatePoisoned)?;
        Ok(Arc::clone(&current))
    }

    /// Replaces the whole project state and persists the difference.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::StatePoisoned`] or
    /// [`WorkspaceError::Closed`].
    pub fn update_project(&self, project: Project) -> WorkspaceResult<()> {
        self.apply("update_project", |_| Ok((project, ())))
    }

    /// Adds a task ranked last in its quadrant.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank or oversized title or
    /// description, and `NotFound` for an assignee who is not a member.
    pub fn add_task(&self, request: NewTask) -> WorkspaceResult<Task> {
        self.validation
            .check_new_task(&request)
            .map_err(ProjectDomainError::from)?;
        self.apply("add_task", |project| {
            project.with_task_added(request, self.clock.as_ref())
        })
    }

    /// Edits a task's content fields and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown task or assignee and a validation
    /// error for a blank or oversized title or description.
    pub fn edit_task(&self, task_id: TaskId, patch: &TaskPatch) -> WorkspaceResult<Task> {
        self.validation
            .check_patch(patch)
            .map_err(ProjectDomainError::from)?;
        self.apply("edit_task", |project| {
            let next = project.with_task_edited(task_id, patch, self.clock.as_ref())?;
            with_task(next, task_id)
        })
    }

    /// Sets a task's progress state and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown task and `NoOp` when the status is
    /// unchanged.
    pub fn set_task_status(&self, task_id: TaskId, status: TaskStatus) -> WorkspaceResult<Task> {
        self.apply("set_task_status", |project| {
            let next = project.with_task_status(task_id, status, self.clock.as_ref())?;
            with_task(next, task_id)
        })
    }

    /// Sets a task's priority and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown task and `NoOp` when the priority
    /// is unchanged.
    pub fn set_task_priority(&self, task_id: TaskId, priority: Priority) -> WorkspaceResult<Task> {
        self.apply("set_task_priority", |project| {
            let next = project.with_task_priority(task_id, priority, self.clock.as_ref())?;
            with_task(next, task_id)
        })
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown task.
    pub fn delete_task(&self, task_id: TaskId) -> WorkspaceResult<()> {
        self.apply("delete_task", |project| {
            Ok((project.with_task_deleted(task_id)?, ()))
        })
    }

    /// Handles a task dropped onto a quadrant, or outside any quadrant.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown task and `NoOp` when the drop was
    /// cancelled or landed on the task's own quadrant.
    pub fn drop_task(&self, task_id: TaskId, target: Option<Quadrant>) -> WorkspaceResult<()> {
        self.gesture("drop_task", DragGesture::Drop { task_id, target })
    }

    /// Handles a dragged task hovering over another task.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown task and `NoOp` when the tasks
    /// already share a position.
    pub fn hover_reorder(&self, drag_id: TaskId, hover_id: TaskId) -> WorkspaceResult<()> {
        self.gesture("hover_reorder", DragGesture::HoverReorder { drag_id, hover_id })
    }

    /// Renames the project.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name and `NoOp` when the name
    /// is unchanged.
    pub fn rename_project(&self, name: &str) -> WorkspaceResult<()> {
        self.apply("rename_project", |project| Ok((project.renamed(name)?, ())))
    }

    /// Sets or clears the project description.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::StatePoisoned`] or
    /// [`WorkspaceError::Closed`].
    pub fn update_description(&self, description: Option<&str>) -> WorkspaceResult<()> {
        self.apply("update_description", |project| {
            Ok((project.with_description(description), ()))
        })
    }

    /// Invites a member by email.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed or duplicate address or an
    /// owner invitation.
    pub fn invite_member(&self, email: &str, role: MemberRole) -> WorkspaceResult<Member> {
        self.apply("invite_member", |project| {
            project.with_member_invited(email, role)
        })
    }

    /// Changes a member's role.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown member and a validation error when
    /// the change touches ownership.
    pub fn change_member_role(&self, member_id: MemberId, role: MemberRole) -> WorkspaceResult<()> {
        self.apply("change_member_role", |project| {
            Ok((project.with_member_role(member_id, role)?, ()))
        })
    }

    /// Removes a member.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown member and a validation error for
    /// the owner.
    pub fn remove_member(&self, member_id: MemberId) -> WorkspaceResult<()> {
        self.apply("remove_member", |project| {
            Ok((project.without_member(member_id)?, ()))
        })
    }

    /// Schedules a calendar event.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank title.
    pub fn schedule_event(&self, request: NewEvent) -> WorkspaceResult<CalendarEvent> {
        self.apply("schedule_event", |project| project.with_event(request))
    }

    /// Removes a calendar event.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown event.
    pub fn remove_event(&self, event_id: EventId) -> WorkspaceResult<()> {
        self.apply("remove_event", |project| {
            Ok((project.without_event(event_id)?, ()))
        })
    }

    /// Posts a chat message.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the sender is not a member and a validation
    /// error for blank content.
    pub fn post_message(&self, sender_id: MemberId, content: &str) -> WorkspaceResult<ChatMessage> {
        self.apply("post_message", |project| {
            project.with_message(sender_id, content, self.clock.as_ref())
        })
    }

    /// Posts a message for a file already stored in the blob store.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the sender is not a member.
    pub fn attach_file(
        &self,
        sender_id: MemberId,
        attachment: Attachment,
    ) -> WorkspaceResult<ChatMessage> {
        self.apply("attach_file", |project| {
            project.with_attachment(sender_id, attachment, self.clock.as_ref())
        })
    }

    /// Uploads a file to the blob store and posts it to the chat.
    ///
    /// Files are stored under `projects/<project id>/files/` with a random
    /// prefix so repeated uploads of one name never collide.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the sender is not a member, a validation error
    /// for an unusable file name, or [`WorkspaceError::Storage`] when the
    /// upload fails.
    pub async fn share_file<B>(
        &self,
        blobs: &B,
        sender_id: MemberId,
        file_name: &str,
        file_type: &str,
        bytes: Vec<u8>,
    ) -> WorkspaceResult<ChatMessage>
    where
        B: BlobStore + ?Sized,
    {
        let project = self.snapshot()?;
        if project.member(sender_id).is_none() {
            return Err(ProjectDomainError::MemberNotFound(sender_id).into());
        }

        let path = BlobPath::new(format!(
            "projects/{}/files/{}-{}",
            project.id(),
            Uuid::new_v4().simple(),
            file_name.trim()
        ))?;
        let file_size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        let file_url = blobs.upload(bytes, &path).await?;
        debug!(project_id = %project.id(), path = %path, "file uploaded");

        self.attach_file(
            sender_id,
            Attachment {
                file_name: file_name.trim().to_owned(),
                file_size,
                file_type: file_type.to_owned(),
                file_url,
            },
        )
    }

    /// Waits until every write queued so far has run.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Closed`] when the dispatcher has stopped.
    pub async fn flush(&self) -> WorkspaceResult<()> {
        Ok(self.dispatcher.flush().await?)
    }

    /// Drains pending writes and stops the dispatcher.
    pub async fn shutdown(self) {
        self.dispatcher.shutdown().await;
    }

    fn gesture(&self, command: &'static str, gesture: DragGesture) -> WorkspaceResult<()> {
        self.apply(command, |project| Ok((project.with_gesture(gesture)?, ())))
    }

    /// Runs a command against the current snapshot and queues its writes.
    ///
    /// The write lock is held until the writes are queued so the queue order
    /// matches the order in which commands were applied. A stopped queue is
    /// detected before the snapshot changes; once the snapshot is swapped the
    /// command succeeds, and a queue that closes mid-way only loses writes.
    fn apply<T, F>(&self, command: &'static str, change: F) -> WorkspaceResult<T>
    where
        F: FnOnce(&Project) -> Result<(Project, T), ProjectDomainError>,
    {
        let mut current = self
            .project
            .write()
            .map_err(|_| WorkspaceError::StatePoisoned)?;
        if self.dispatcher.is_closed() {
            debug!(command, "workspace command rejected: persistence queue closed");
            return Err(DispatcherClosed.into());
        }
        let (next, output) = change(&current).inspect_err(|err| {
            debug!(command, error = %err, "workspace command rejected");
        })?;

        let writes = task_writes(&current, &next);
        let write_count = writes.len();
        *current = Arc::new(next);
        let replace = PersistCommand::ReplaceProject {
            project: Box::new(Project::clone(&current)),
        };
        for write in writes.into_iter().chain(iter::once(replace)) {
            let operation = write.operation();
            if let Err(err) = self.dispatcher.dispatch(write) {
                warn!(command, operation, error = %err, "committed change not queued");
                break;
            }
        }

        debug!(
            command,
            project_id = %current.id(),
            task_writes = write_count,
            "workspace command applied"
        );
        Ok(output)
    }
}

fn missing_task(task_id: TaskId) -> ProjectDomainError {
    ProjectDomainError::Task(TaskDomainError::NotFound(task_id))
}

/// Pairs a project with a copy of one of its tasks.
fn with_task(project: Project, task_id: TaskId) -> Result<(Project, Task), ProjectDomainError> {
    let task = project
        .task(task_id)
        .cloned()
        .ok_or_else(|| missing_task(task_id))?;
    Ok((project, task))
}

/// Lists the task store writes that turn `before` into `after`.
fn task_writes(before: &Project, after: &Project) -> Vec<PersistCommand> {
    let before_ids: HashSet<TaskId> = before.tasks().iter().map(Task::id).collect();
    let after_ids: HashSet<TaskId> = after.tasks().iter().map(Task::id).collect();

    let created = after
        .tasks()
        .iter()
        .filter(|task| !before_ids.contains(&task.id()))
        .map(|task| PersistCommand::CreateTask {
            project_id: after.id(),
            task: task.clone(),
        });
    let updated = ordering::changed_tasks(before.tasks(), after.tasks())
        .into_iter()
        .map(|(task_id, changes)| PersistCommand::UpdateTask { task_id, changes });
    let deleted = before
        .tasks()
        .iter()
        .filter(|task| !after_ids.contains(&task.id()))
        .map(|task| PersistCommand::DeleteTask { task_id: task.id() });

    created.chain(updated).chain(deleted).collect()
}
