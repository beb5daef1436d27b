//! Composition root wiring configured adapters into the services.
//!
//! Each [`Flowtask`] owns its own store, so separate instances (for example
//! one per test) never share state unless they point at the same data
//! directory.

use async_trait::async_trait;
use mockable::DefaultClock;
use std::sync::Arc;

use crate::auth::{
    adapters::{KeyValueSessionRepository, MockGoogleIdentityProvider, TokioDelay},
    services::AuthService,
};
use crate::config::FlowtaskConfig;
use crate::storage::{
    adapters::{FileKeyValueStore, InMemoryKeyValueStore},
    ports::{KeyValueStore, StorageResult},
};
use crate::task::{adapters::keyvalue::KeyValueTaskRepository, services::TaskService};

/// Store selected by configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredStore {
    /// Volatile in-process store.
    Memory(InMemoryKeyValueStore),
    /// Durable store under the configured data directory.
    File(FileKeyValueStore),
}

#[async_trait]
impl KeyValueStore for ConfiguredStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::File(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            Self::File(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            Self::File(store) => store.remove(key).await,
        }
    }
}

/// Task service wired to the configured store and the system clock.
pub type AppTaskService = TaskService<KeyValueTaskRepository<ConfiguredStore>, DefaultClock>;

/// Auth service wired to the configured store and the simulated provider.
pub type AppAuthService = AuthService<
    KeyValueSessionRepository<ConfiguredStore>,
    MockGoogleIdentityProvider<TokioDelay>,
    DefaultClock,
>;

/// Fully wired application services.
pub struct Flowtask {
    tasks: AppTaskService,
    auth: AppAuthService,
}

impl Flowtask {
    /// Builds the services described by `config`.
    ///
    /// Uses the filesystem store when `config.storage.data_dir` is set and
    /// an in-memory store otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`crate::storage::ports::StorageError`] when the data
    /// directory cannot be opened.
    pub fn open(config: &FlowtaskConfig) -> StorageResult<Self> {
        let store = match &config.storage.data_dir {
            Some(dir) => ConfiguredStore::File(FileKeyValueStore::open(dir)?),
            None => ConfiguredStore::Memory(InMemoryKeyValueStore::new()),
        };
        let store = Arc::new(store);
        let clock = Arc::new(DefaultClock);

        let task_repository = KeyValueTaskRepository::with_collection_key(
            Arc::clone(&store),
            config.storage.task_collection_key.clone(),
        );
        let tasks = TaskService::new(Arc::new(task_repository), Arc::clone(&clock))
            .with_limits(config.limits);

        let sessions = KeyValueSessionRepository::with_session_key(
            store,
            config.storage.current_session_key.clone(),
        );
        let identity = MockGoogleIdentityProvider::new(TokioDelay, config.auth);
        let auth = AuthService::new(Arc::new(sessions), Arc::new(identity), clock);

        Ok(Self { tasks, auth })
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &AppTaskService {
        &self.tasks
    }

    /// Returns the auth service.
    #[must_use]
    pub const fn auth(&self) -> &AppAuthService {
        &self.auth
    }
}
