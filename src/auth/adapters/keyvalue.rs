//! Key-value backed session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::{
    domain::{AuthProvider, PersistedUserData, User, UserId},
    ports::{SessionRepository, SessionRepositoryError, SessionRepositoryResult},
};
use crate::storage::ports::KeyValueStore;

/// Storage key used when none is configured.
pub const DEFAULT_SESSION_KEY: &str = "current-session";

/// JSON shape of the stored session user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// User identifier.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar URL, if any.
    #[serde(default, rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Provider name.
    pub provider: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().into_inner(),
            email: user.email().to_owned(),
            name: user.name().to_owned(),
            photo_url: user.photo_url().map(str::to_owned),
            provider: user.provider().as_str().to_owned(),
            created_at: user.created_at(),
        }
    }
}

/// Session repository storing the current user as one JSON object.
pub struct KeyValueSessionRepository<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    session_key: String,
}

impl<S> KeyValueSessionRepository<S>
where
    S: KeyValueStore,
{
    /// Creates a repository using [`DEFAULT_SESSION_KEY`].
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_session_key(store, DEFAULT_SESSION_KEY)
    }

    /// Creates a repository storing the session under `session_key`.
    #[must_use]
    pub fn with_session_key(store: Arc<S>, session_key: impl Into<String>) -> Self {
        Self {
            store,
            session_key: session_key.into(),
        }
    }
}

#[async_trait]
impl<S> SessionRepository for KeyValueSessionRepository<S>
where
    S: KeyValueStore,
{
    async fn load(&self) -> Option<User> {
        let raw = match self.store.get(&self.session_key).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(key = %self.session_key, error = %err, "session read failed");
                return None;
            }
        };

        let record = serde_json::from_str::<UserRecord>(&raw)
            .inspect_err(|err| {
                warn!(key = %self.session_key, error = %err, "session is not valid JSON");
            })
            .ok()?;

        let provider = AuthProvider::try_from(record.provider.as_str())
            .inspect_err(|err| {
                warn!(key = %self.session_key, error = %err, "session has unknown provider");
            })
            .ok()?;

        Some(User::from_persisted(PersistedUserData {
            id: UserId::from_uuid(record.id),
            email: record.email,
            name: record.name,
            photo_url: record.photo_url,
            provider,
            created_at: record.created_at,
        }))
    }

    async fn save(&self, user: &User) -> SessionRepositoryResult<()> {
        let payload = serde_json::to_string(&UserRecord::from(user))
            .map_err(SessionRepositoryError::write_failed)?;
        self.store
            .set(&self.session_key, &payload)
            .await
            .map_err(SessionRepositoryError::write_failed)?;
        debug!(key = %self.session_key, user_id = %user.id(), "session stored");
        Ok(())
    }

    async fn clear(&self) -> SessionRepositoryResult<()> {
        self.store
            .remove(&self.session_key)
            .await
            .map_err(SessionRepositoryError::write_failed)?;
        debug!(key = %self.session_key, "session cleared");
        Ok(())
    }
}
