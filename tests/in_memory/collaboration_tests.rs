//! Members, calendar, and chat through the workspace.

use super::helpers::open_board;
use chrono::NaiveDate;
use eyre::{WrapErr, eyre};
use taskmatrix::project::domain::{MemberId, MemberRole, MessageKind, NewEvent, UNASSIGNED};
use taskmatrix::project::ports::ProjectRepository;
use taskmatrix::storage::{adapters::memory::InMemoryBlobStore, domain::BlobPath};
use taskmatrix::task::domain::{ErrorKind, NewTask, Quadrant};

#[tokio::test(flavor = "multi_thread")]
async fn removed_members_leave_their_tasks_unassigned() -> eyre::Result<()> {
    let harness = open_board("Launch").await?;
    let member = harness
        .workspace
        .invite_member("eve@example.com", MemberRole::Editor)
        .map_err(|err| eyre!("invite: {err}"))?;
    let task = harness
        .workspace
        .add_task(NewTask::new("Review", Quadrant::UrgentImportant).with_assignee(member.id()))
        .map_err(|err| eyre!("add: {err}"))?;
    harness
        .workspace
        .flush()
        .await
        .map_err(|err| eyre!("flush: {err}"))?;
    let shared = harness
        .projects
        .list_for_member(member.id())
        .await
        .wrap_err("list invited member's projects")?;
    assert_eq!(shared.len(), 1);

    harness
        .workspace
        .remove_member(member.id())
        .map_err(|err| eyre!("remove: {err}"))?;
    harness
        .workspace
        .flush()
        .await
        .map_err(|err| eyre!("flush: {err}"))?;

    let snapshot = harness.snapshot()?;
    let kept = snapshot
        .task(task.id())
        .ok_or_else(|| eyre!("task removed with member"))?;
    assert_eq!(snapshot.assignee_name(kept), UNASSIGNED);
    assert!(harness
        .projects
        .list_for_member(member.id())
        .await
        .wrap_err("list removed member's projects")?
        .is_empty());

    harness.workspace.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn the_owner_keeps_their_role() -> eyre::Result<()> {
    let harness = open_board("Launch").await?;
    let owner = MemberId::from(harness.owner.id());

    let demote = harness
        .workspace
        .change_member_role(owner, MemberRole::Viewer)
        .expect_err("owner role is fixed");
    let remove = harness
        .workspace
        .remove_member(owner)
        .expect_err("owner cannot leave");

    assert_eq!(demote.kind(), Some(ErrorKind::Validation));
    assert_eq!(remove.kind(), Some(ErrorKind::Validation));
    harness.workspace.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn events_are_scheduled_and_removed() -> eyre::Result<()> {
    let harness = open_board("Launch").await?;
    let day = NaiveDate::from_ymd_opt(2024, 9, 12).ok_or_else(|| eyre!("invalid date"))?;

    let event = harness
        .workspace
        .schedule_event(NewEvent::new("Demo day", day).with_description("Show the board"))
        .map_err(|err| eyre!("schedule: {err}"))?;
    assert_eq!(harness.snapshot()?.events_on(day).len(), 1);

    harness
        .workspace
        .remove_event(event.id())
        .map_err(|err| eyre!("remove: {err}"))?;
    let again = harness
        .workspace
        .remove_event(event.id())
        .expect_err("already removed");

    assert!(harness.snapshot()?.events_on(day).is_empty());
    assert_eq!(again.kind(), Some(ErrorKind::NotFound));
    harness.workspace.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn shared_files_are_uploaded_and_posted() -> eyre::Result<()> {
    let harness = open_board("Launch").await?;
    let blobs = InMemoryBlobStore::new("board-files");
    let owner = MemberId::from(harness.owner.id());

    let message = harness
        .workspace
        .share_file(&blobs, owner, " notes.txt ", "text/plain", b"agenda".to_vec())
        .await
        .map_err(|err| eyre!("share: {err}"))?;

    let MessageKind::File { attachment } = message.kind() else {
        return Err(eyre!("expected a file message, got {:?}", message.kind()));
    };
    assert_eq!(attachment.file_name, "notes.txt");
    assert_eq!(attachment.file_size, 6);
    assert_eq!(message.content(), "notes.txt");

    let prefix = format!("memory://board-files/projects/{}/files/", harness.project_id()?);
    let url = attachment.file_url.as_str();
    assert!(url.starts_with(&prefix), "unexpected url {url}");
    let stored_path = url
        .trim_start_matches("memory://board-files/")
        .split('?')
        .next()
        .ok_or_else(|| eyre!("url without path"))?;
    let path = BlobPath::new(stored_path).wrap_err("parse stored path")?;
    assert_eq!(blobs.bytes(&path).wrap_err("read upload")?, b"agenda".to_vec());

    harness.workspace.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn strangers_cannot_share_files() -> eyre::Result<()> {
    let harness = open_board("Launch").await?;
    let blobs = InMemoryBlobStore::default();

    let err = harness
        .workspace
        .share_file(&blobs, MemberId::new(), "notes.txt", "text/plain", Vec::new())
        .await
        .expect_err("not a member");

    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
    assert!(harness.snapshot()?.messages().is_empty());
    harness.workspace.shutdown().await;
    Ok(())
}
