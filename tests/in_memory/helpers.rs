//! Shared wiring for in-memory integration tests.

use std::sync::Arc;

use flowtask::auth::{
    adapters::{KeyValueSessionRepository, MockGoogleIdentityProvider, NoDelay},
    services::AuthService,
};
use flowtask::config::AuthConfig;
use flowtask::storage::adapters::InMemoryKeyValueStore;
use flowtask::task::{adapters::keyvalue::KeyValueTaskRepository, services::TaskService};
use flowtask::test_support::{SteppingClock, fixture_timestamp};

/// Task service over an in-memory store with a stepping clock.
pub type MemoryTaskService =
    TaskService<KeyValueTaskRepository<InMemoryKeyValueStore>, SteppingClock>;

/// Auth service over an in-memory store with an instant demo provider.
pub type MemoryAuthService = AuthService<
    KeyValueSessionRepository<InMemoryKeyValueStore>,
    MockGoogleIdentityProvider<NoDelay>,
    SteppingClock,
>;

/// Services sharing one in-memory store.
pub struct Harness {
    pub store: Arc<InMemoryKeyValueStore>,
    pub tasks: MemoryTaskService,
    pub auth: MemoryAuthService,
}

/// Builds a fresh harness with an empty store.
#[must_use]
pub fn harness() -> Harness {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let clock = Arc::new(SteppingClock::new(fixture_timestamp()));
    let tasks = TaskService::new(
        Arc::new(KeyValueTaskRepository::new(Arc::clone(&store))),
        Arc::clone(&clock),
    );
    let auth = AuthService::new(
        Arc::new(KeyValueSessionRepository::new(Arc::clone(&store))),
        Arc::new(MockGoogleIdentityProvider::new(
            NoDelay,
            AuthConfig::instant(),
        )),
        clock,
    );
    Harness { store, tasks, auth }
}
