//! Repository port for the current user session.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::auth::domain::User;

/// Result type for session repository write operations.
pub type SessionRepositoryResult<T> = Result<T, SessionRepositoryError>;

/// Persistence contract for the single current session.
///
/// Reads never fail: an unreadable session is logged and treated as signed
/// out.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns the stored session user, if any.
    async fn load(&self) -> Option<User>;

    /// Stores `user` as the current session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionRepositoryError::WriteFailed`] when the session
    /// cannot be persisted.
    async fn save(&self, user: &User) -> SessionRepositoryResult<()>;

    /// Removes the current session. Clearing an empty session succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionRepositoryError::WriteFailed`] when the store rejects
    /// the removal.
    async fn clear(&self) -> SessionRepositoryResult<()>;
}

/// Errors returned by session repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionRepositoryError {
    /// The underlying store rejected a write.
    #[error("session write failed: {0}")]
    WriteFailed(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionRepositoryError {
    /// Wraps a store write failure.
    #[must_use]
    pub fn write_failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::WriteFailed(Arc::new(err))
    }
}
