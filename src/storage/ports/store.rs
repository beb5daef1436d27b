//! Key-value store port used by every persistence adapter in the crate.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Whole-document string store addressed by key.
///
/// Implementations must make `set` replace the stored value in one step so
/// readers never observe a partially written document.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key has never been written or was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing medium cannot be read.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the value cannot be persisted.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing medium rejects the removal.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto the backing medium.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// A lock guarding in-process state was poisoned.
    #[error("storage lock poisoned: {0}")]
    Poisoned(String),

    /// The backing medium failed.
    #[error("storage I/O failure on '{key}': {source}")]
    Io {
        /// Key being accessed when the failure happened.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl StorageError {
    /// Wraps an I/O error raised while accessing `key`.
    #[must_use]
    pub fn io(key: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source: Arc::new(err),
        }
    }
}
