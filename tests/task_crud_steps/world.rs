//! Shared world state for task record BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskstore::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{CompletionToggle, DeletedTask, TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task record behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub pending_title: Option<String>,
    pub pending_description: Option<String>,
    pub stored_task: Option<Task>,
    pub last_create_result: Option<Result<Task, TaskServiceError>>,
    pub last_update_result: Option<Result<Task, TaskServiceError>>,
    pub last_toggle: Option<CompletionToggle>,
    pub last_deletion: Option<DeletedTask>,
    pub last_search: Option<Vec<Task>>,
}

impl TaskWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            pending_title: None,
            pending_description: None,
            stored_task: None,
            last_create_result: None,
            last_update_result: None,
            last_toggle: None,
            last_deletion: None,
            last_search: None,
        }
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
