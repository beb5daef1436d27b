//! Deterministic test doubles shared by unit and integration tests.

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::storage::adapters::InMemoryKeyValueStore;
use crate::storage::ports::{KeyValueStore, StorageError, StorageResult};

/// Returns a fixed reference instant used across test suites.
///
/// # Panics
///
/// Panics if the hard-coded date is invalid.
#[must_use]
pub fn fixture_timestamp() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).single() {
        Some(timestamp) => timestamp,
        None => panic!("fixture timestamp must be valid"),
    }
}

/// Clock that reports a settable instant.
#[derive(Debug, Clone)]
pub struct MutableClock(Arc<Mutex<DateTime<Utc>>>);

impl MutableClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(now)))
    }

    /// Moves the clock forward by `seconds`.
    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    /// Sets the clock to `now`.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock_clock() = now;
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Clock that advances by one second after every read.
///
/// Successive timestamps are therefore strictly increasing.
#[derive(Debug, Clone)]
pub struct SteppingClock(MutableClock);

impl SteppingClock {
    /// Creates a clock whose first reading is `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self(MutableClock::new(start))
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let now = self.0.utc();
        self.0.advance_seconds(1);
        now
    }
}

/// In-memory store whose reads and writes can be made to fail on demand.
#[derive(Debug, Clone, Default)]
pub struct FlakyKeyValueStore {
    inner: InMemoryKeyValueStore,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl FlakyKeyValueStore {
    /// Creates a healthy store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent reads fail (or succeed again).
    pub fn fail_reads(&self, enabled: bool) {
        self.fail_reads.store(enabled, Ordering::SeqCst);
    }

    /// Makes subsequent writes and removals fail (or succeed again).
    pub fn fail_writes(&self, enabled: bool) {
        self.fail_writes.store(enabled, Ordering::SeqCst);
    }

    /// Returns the wrapped store for direct inspection or seeding.
    #[must_use]
    pub const fn inner(&self) -> &InMemoryKeyValueStore {
        &self.inner
    }

    fn simulated_failure(key: &str, operation: &str) -> StorageError {
        StorageError::io(
            key,
            std::io::Error::other(format!("simulated {operation} failure")),
        )
    }
}

#[async_trait]
impl KeyValueStore for FlakyKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::simulated_failure(key, "read"));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::simulated_failure(key, "write"));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::simulated_failure(key, "remove"));
        }
        self.inner.remove(key).await
    }
}
