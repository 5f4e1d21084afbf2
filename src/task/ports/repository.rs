//! Repository port for task persistence, lookup, search, and counting.

use crate::task::domain::{PageRequest, SearchQuery, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Listings are ordered by creation time (oldest first) with the identifier
/// as a tie-breaker, so pagination windows over a stable sequence.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task
    /// identifier already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (fields, completion flag,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the requested page of tasks in creation order.
    async fn list(&self, page: PageRequest) -> TaskRepositoryResult<Vec<Task>>;

    /// Deletes a task by identifier.
    ///
    /// Returns the removed task, or `None` when no task carried the
    /// identifier.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks whose title or description contains the query,
    /// compared case-insensitively, in creation order.
    async fn search(&self, query: &SearchQuery) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all completed tasks in creation order.
    async fn find_completed(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all pending tasks in creation order.
    async fn find_pending(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the total number of stored tasks.
    async fn count(&self) -> TaskRepositoryResult<u64>;

    /// Returns the number of completed tasks.
    async fn count_completed(&self) -> TaskRepositoryResult<u64>;

    /// Returns the number of pending tasks.
    async fn count_pending(&self) -> TaskRepositoryResult<u64>;

    /// Verifies that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store cannot be
    /// reached.
    async fn ping(&self) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
