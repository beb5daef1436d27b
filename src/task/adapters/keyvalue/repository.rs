//! Key-value backed task repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::models::TaskRecord;
use crate::storage::ports::KeyValueStore;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Storage key used when none is configured.
pub const DEFAULT_TASK_COLLECTION_KEY: &str = "task-collection";

/// Task repository storing the whole collection as one JSON document.
///
/// Every mutation reads the collection, modifies it and writes it back in a
/// single store call. An async mutex serializes these cycles so two
/// mutations issued without awaiting each other cannot clobber one another.
pub struct KeyValueTaskRepository<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    collection_key: String,
    write_lock: Mutex<()>,
}

impl<S> KeyValueTaskRepository<S>
where
    S: KeyValueStore,
{
    /// Creates a repository using [`DEFAULT_TASK_COLLECTION_KEY`].
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_collection_key(store, DEFAULT_TASK_COLLECTION_KEY)
    }

    /// Creates a repository storing its collection under `collection_key`.
    #[must_use]
    pub fn with_collection_key(store: Arc<S>, collection_key: impl Into<String>) -> Self {
        Self {
            store,
            collection_key: collection_key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads the collection for display, degrading every failure to an
    /// empty result and dropping records that do not decode.
    async fn load(&self) -> Vec<Task> {
        let raw = match self.store.get(&self.collection_key).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %self.collection_key, error = %err, "task collection read failed");
                return Vec::new();
            }
        };
        self.decode(raw)
            .into_iter()
            .filter_map(StoredEntry::into_task)
            .collect()
    }

    /// Reads the collection ahead of a rewrite.
    ///
    /// A failed store read aborts the mutation. Records that do not decode
    /// are carried through untouched so the rewrite preserves them.
    async fn load_for_write(&self) -> TaskRepositoryResult<Vec<StoredEntry>> {
        let raw = self
            .store
            .get(&self.collection_key)
            .await
            .map_err(TaskRepositoryError::read_failed)?;
        Ok(self.decode(raw))
    }

    fn decode(&self, raw: Option<String>) -> Vec<StoredEntry> {
        let Some(raw) = raw else {
            return Vec::new();
        };
        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values,
            Err(err) => {
                warn!(key = %self.collection_key, error = %err, "task collection is not valid JSON");
                return Vec::new();
            }
        };
        values
            .into_iter()
            .map(|value| self.decode_entry(value))
            .collect()
    }

    fn decode_entry(&self, value: serde_json::Value) -> StoredEntry {
        let decoded = serde_json::from_value::<TaskRecord>(value.clone())
            .map_err(|err| err.to_string())
            .and_then(|record| Task::try_from(record).map_err(|err| err.to_string()));
        match decoded {
            Ok(task) => StoredEntry::Task(task),
            Err(error) => {
                warn!(
                    key = %self.collection_key,
                    error = %error,
                    "task record could not be decoded"
                );
                StoredEntry::Opaque(value)
            }
        }
    }

    async fn save(&self, entries: &[StoredEntry]) -> TaskRepositoryResult<()> {
        let values = entries
            .iter()
            .map(StoredEntry::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(TaskRepositoryError::write_failed)?;
        let payload =
            serde_json::to_string(&values).map_err(TaskRepositoryError::write_failed)?;
        self.store
            .set(&self.collection_key, &payload)
            .await
            .map_err(TaskRepositoryError::write_failed)?;
        debug!(key = %self.collection_key, count = entries.len(), "task collection written");
        Ok(())
    }
}

/// One element of the stored array.
enum StoredEntry {
    Task(Task),
    /// A record this version cannot decode, kept verbatim.
    Opaque(serde_json::Value),
}

impl StoredEntry {
    fn into_task(self) -> Option<Task> {
        match self {
            Self::Task(task) => Some(task),
            Self::Opaque(_) => None,
        }
    }

    fn task(&self) -> Option<&Task> {
        match self {
            Self::Task(task) => Some(task),
            Self::Opaque(_) => None,
        }
    }

    fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            Self::Task(task) => serde_json::to_value(TaskRecord::from(task)),
            Self::Opaque(value) => Ok(value.clone()),
        }
    }
}

#[async_trait]
impl<S> TaskRepository for KeyValueTaskRepository<S>
where
    S: KeyValueStore,
{
    async fn get_all(&self) -> Vec<Task> {
        self.load().await
    }

    async fn get_by_id(&self, id: TaskId) -> Option<Task> {
        self.load().await.into_iter().find(|task| task.id() == id)
    }

    async fn create(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_for_write().await?;
        if entries
            .iter()
            .filter_map(StoredEntry::task)
            .any(|existing| existing.id() == task.id())
        {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        entries.push(StoredEntry::Task(task.clone()));
        self.save(&entries).await?;
        Ok(task.clone())
    }

    async fn update(&self, id: TaskId, task: &Task) -> TaskRepositoryResult<Option<Task>> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_for_write().await?;
        let Some(slot) = entries
            .iter_mut()
            .find(|entry| entry.task().is_some_and(|existing| existing.id() == id))
        else {
            return Ok(None);
        };
        *slot = StoredEntry::Task(task.clone());
        self.save(&entries).await?;
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_for_write().await?;
        let before = entries.len();
        entries.retain(|entry| entry.task().is_none_or(|task| task.id() != id));
        if entries.len() == before {
            return Ok(false);
        }
        self.save(&entries).await?;
        Ok(true)
    }

    async fn clear(&self) -> TaskRepositoryResult<()> {
        let _guard = self.write_lock.lock().await;
        self.store
            .remove(&self.collection_key)
            .await
            .map_err(TaskRepositoryError::write_failed)?;
        debug!(key = %self.collection_key, "task collection cleared");
        Ok(())
    }
}
