//! Repository port for the stored task collection.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository write operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Plain reads fail soft: an unreadable or corrupted collection is reported
/// through logging and surfaces as an empty collection. Mutations fail hard:
/// a collection that cannot be read first yields
/// [`TaskRepositoryError::ReadFailed`] and a rejected write yields
/// [`TaskRepositoryError::WriteFailed`]. In both cases the caller must
/// assume the mutation did not take effect. Stored records that cannot be
/// decoded are hidden from reads but preserved by mutations.
///
/// Implementations rewrite the whole collection on every mutation and must
/// serialize mutations issued concurrently through the same instance.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task in storage order (oldest first).
    async fn get_all(&self) -> Vec<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist or the collection cannot
    /// be read.
    async fn get_by_id(&self, id: TaskId) -> Option<Task>;

    /// Appends a new task to the collection and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the identifier is
    /// already stored, [`TaskRepositoryError::ReadFailed`] when the
    /// collection cannot be read, or [`TaskRepositoryError::WriteFailed`]
    /// when the collection cannot be persisted.
    async fn create(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Replaces the task stored under `id`.
    ///
    /// Returns `Ok(None)` without writing when no task matches; updates
    /// never insert.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::ReadFailed`] when the collection
    /// cannot be read and [`TaskRepositoryError::WriteFailed`] when it
    /// cannot be persisted.
    async fn update(&self, id: TaskId, task: &Task) -> TaskRepositoryResult<Option<Task>>;

    /// Removes the task stored under `id`, returning whether one was removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::ReadFailed`] when the collection
    /// cannot be read and [`TaskRepositoryError::WriteFailed`] when it
    /// cannot be persisted.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Removes the entire stored collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::WriteFailed`] when the store rejects
    /// the removal.
    async fn clear(&self) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The underlying store rejected a write.
    #[error("persistence write failed: {0}")]
    WriteFailed(Arc<dyn std::error::Error + Send + Sync>),

    /// The collection could not be read ahead of a mutation.
    #[error("persistence read failed: {0}")]
    ReadFailed(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a store write failure.
    #[must_use]
    pub fn write_failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::WriteFailed(Arc::new(err))
    }

    /// Wraps a store read failure met during a mutation.
    #[must_use]
    pub fn read_failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::ReadFailed(Arc::new(err))
    }
}
