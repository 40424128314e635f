//! Unit tests for blob paths and the in-memory blob store.

use crate::storage::{
    adapters::memory::InMemoryBlobStore,
    domain::{BlobPath, BlobStoreError},
    ports::BlobStore,
};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryBlobStore {
    InMemoryBlobStore::new("attachments")
}

fn path(raw: &str) -> BlobPath {
    BlobPath::new(raw).expect("valid blob path")
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("/absolute/file.txt")]
#[case("projects//file.txt")]
#[case("projects/../secrets")]
#[case("./file.txt")]
#[case("projects/")]
fn invalid_paths_are_rejected(#[case] raw: &str) {
    let result = BlobPath::new(raw);
    assert!(matches!(result, Err(BlobStoreError::InvalidPath(value)) if value == raw));
}

#[rstest]
fn paths_expose_their_file_name() {
    let blob = path(" projects/p1/files/report.pdf ");
    assert_eq!(blob.as_str(), "projects/p1/files/report.pdf");
    assert_eq!(blob.file_name(), "report.pdf");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn upload_stores_bytes_and_returns_a_stable_url(store: InMemoryBlobStore) {
    let blob = path("projects/p1/notes.txt");

    let uploaded = store
        .upload(b"hello".to_vec(), &blob)
        .await
        .expect("upload should succeed");
    let looked_up = store.url(&blob).await.expect("url should succeed");

    assert_eq!(uploaded, looked_up);
    assert!(uploaded.as_str().starts_with("memory://attachments/projects/p1/notes.txt?v="));
    assert_eq!(store.bytes(&blob).expect("bytes"), b"hello".to_vec());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reupload_with_new_content_changes_the_url(store: InMemoryBlobStore) {
    let blob = path("projects/p1/notes.txt");
    let first = store
        .upload(b"v1".to_vec(), &blob)
        .await
        .expect("upload should succeed");
    let second = store
        .upload(b"v2".to_vec(), &blob)
        .await
        .expect("upload should succeed");

    assert_ne!(first, second);
    assert_eq!(store.url(&blob).await.expect("url should succeed"), second);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_blob(store: InMemoryBlobStore) {
    let blob = path("projects/p1/old.txt");
    store
        .upload(Vec::new(), &blob)
        .await
        .expect("upload should succeed");

    store.delete(&blob).await.expect("delete should succeed");

    assert!(matches!(store.url(&blob).await, Err(BlobStoreError::NotFound(_))));
    assert!(matches!(store.delete(&blob).await, Err(BlobStoreError::NotFound(_))));
}
