//! Blob storage value types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Relative, slash-separated location of a blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlobPath(String);

impl BlobPath {
    /// Creates a validated blob path.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::InvalidPath`] for empty or absolute paths
    /// and for paths with empty, `.` or `..` segments.
    pub fn new(value: impl Into<String>) -> Result<Self, BlobStoreError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let is_valid = !trimmed.is_empty()
            && !trimmed.starts_with('/')
            && trimmed
                .split('/')
                .all(|segment| !segment.is_empty() && segment != "." && segment != "..");
        if !is_valid {
            return Err(BlobStoreError::InvalidPath(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the path as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the final path segment.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }
}

impl TryFrom<String> for BlobPath {
    type Error = BlobStoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BlobPath> for String {
    fn from(value: BlobPath) -> Self {
        value.0
    }
}

impl fmt::Display for BlobPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Download URL handed out by the blob store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobUrl(String);

impl BlobUrl {
    /// Wraps a URL produced by a blob store.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the URL as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors returned by blob stores.
#[derive(Debug, Clone, Error)]
pub enum BlobStoreError {
    /// The path is not a valid relative blob path.
    #[error("invalid blob path: '{0}'")]
    InvalidPath(String),

    /// No blob is stored at the path.
    #[error("blob not found: {0}")]
    NotFound(BlobPath),

    /// Storage backend failure.
    #[error("storage error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BlobStoreError {
    /// Wraps a backend error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
