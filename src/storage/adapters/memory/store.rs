//! In-memory blob store.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::storage::{
    domain::{BlobPath, BlobStoreError, BlobUrl},
    ports::{BlobStore, BlobStoreResult},
};

/// Number of digest bytes embedded in generated URLs.
const URL_DIGEST_BYTES: usize = 8;

/// Thread-safe in-memory blob store.
///
/// URLs take the form `memory://{bucket}/{path}?v={digest}` where `digest`
/// is a SHA-256 prefix of the content, so re-uploading different bytes to
/// the same path yields a new URL.
#[derive(Debug, Clone)]
pub struct InMemoryBlobStore {
    bucket: String,
    blobs: Arc<RwLock<HashMap<BlobPath, StoredBlob>>>,
}

#[derive(Debug, Clone)]
struct StoredBlob {
    bytes: Vec<u8>,
    url: BlobUrl,
}

impl InMemoryBlobStore {
    /// Creates an empty store for a bucket name.
    #[must_use]
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            blobs: Arc::default(),
        }
    }

    /// Returns a copy of the bytes stored at a path.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::NotFound`] when nothing is stored there.
    pub fn bytes(&self, path: &BlobPath) -> BlobStoreResult<Vec<u8>> {
        let blobs = self.blobs.read().map_err(|err| {
            BlobStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        blobs
            .get(path)
            .map(|blob| blob.bytes.clone())
            .ok_or_else(|| BlobStoreError::NotFound(path.clone()))
    }

    fn url_for(&self, path: &BlobPath, bytes: &[u8]) -> BlobUrl {
        let digest = Sha256::digest(bytes);
        let version: String = digest
            .iter()
            .take(URL_DIGEST_BYTES)
            .map(|byte| format!("{byte:02x}"))
            .collect();
        BlobUrl::new(format!("memory://{}/{path}?v={version}", self.bucket))
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new("default")
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn upload(&self, bytes: Vec<u8>, path: &BlobPath) -> BlobStoreResult<BlobUrl> {
        let url = self.url_for(path, &bytes);
        let mut blobs = self.blobs.write().map_err(|err| {
            BlobStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        blobs.insert(
            path.clone(),
            StoredBlob {
                bytes,
                url: url.clone(),
            },
        );
        Ok(url)
    }

    async fn delete(&self, path: &BlobPath) -> BlobStoreResult<()> {
        let mut blobs = self.blobs.write().map_err(|err| {
            BlobStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        blobs
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| BlobStoreError::NotFound(path.clone()))
    }

    async fn url(&self, path: &BlobPath) -> BlobStoreResult<BlobUrl> {
        let blobs = self.blobs.read().map_err(|err| {
            BlobStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        blobs
            .get(path)
            .map(|blob| blob.url.clone())
            .ok_or_else(|| BlobStoreError::NotFound(path.clone()))
    }
}
