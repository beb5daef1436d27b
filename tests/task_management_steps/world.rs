//! Shared world state for task management BDD scenarios.

use std::sync::Arc;

use flowtask::storage::adapters::InMemoryKeyValueStore;
use flowtask::task::{
    adapters::keyvalue::KeyValueTaskRepository,
    domain::{Task, TaskStats},
    services::{TaskService, TaskServiceError},
};
use flowtask::test_support::{SteppingClock, fixture_timestamp};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskService<KeyValueTaskRepository<InMemoryKeyValueStore>, SteppingClock>;

/// Scenario world for task management behaviour tests.
pub struct TaskManagementWorld {
    pub service: TestTaskService,
    pub original_task: Option<Task>,
    pub current_task: Option<Task>,
    pub last_create_result: Option<Result<Task, TaskServiceError>>,
    pub listed: Vec<Task>,
    pub stats: Option<TaskStats>,
}

impl TaskManagementWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::new(
            Arc::new(KeyValueTaskRepository::new(Arc::new(
                InMemoryKeyValueStore::new(),
            ))),
            Arc::new(SteppingClock::new(fixture_timestamp())),
        );
        Self {
            service,
            original_task: None,
            current_task: None,
            last_create_result: None,
            listed: Vec::new(),
            stats: None,
        }
    }

    /// Returns the task the scenario is working on.
    pub fn current(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }
}

impl Default for TaskManagementWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskManagementWorld {
    TaskManagementWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
