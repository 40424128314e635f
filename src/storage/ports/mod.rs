//! Port contract for the external blob store.

use super::domain::{BlobPath, BlobStoreError, BlobUrl};
use async_trait::async_trait;

/// Result type for blob store operations.
pub type BlobStoreResult<T> = Result<T, BlobStoreError>;

/// Blob store contract used for chat attachments.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores bytes at a path, replacing any previous blob, and returns
    /// its download URL.
    async fn upload(&self, bytes: Vec<u8>, path: &BlobPath) -> BlobStoreResult<BlobUrl>;

    /// Deletes the blob at a path.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::NotFound`] when nothing is stored there.
    async fn delete(&self, path: &BlobPath) -> BlobStoreResult<()>;

    /// Returns the download URL of the blob at a path.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::NotFound`] when nothing is stored there.
    async fn url(&self, path: &BlobPath) -> BlobStoreResult<BlobUrl>;
}
