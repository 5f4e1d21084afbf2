//! Service layer for task CRUD, search, and statistics.

use crate::task::{
    domain::{
        PageRequest, SearchQuery, Task, TaskDescription, TaskId, TaskPatch, TaskTitle,
        TaskValidationError,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Fields arrive raw; the service validates and normalizes them before a
/// record is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    /// Raw title.
    pub title: String,
    /// Raw description; absent means empty.
    #[serde(default)]
    pub description: Option<String>,
}

/// Request payload for partially updating a task.
///
/// Absent fields leave the stored values untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    /// Replacement title, when present.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description, when present.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement completion flag, when present.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Page of tasks together with collection-wide counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPage {
    /// Tasks inside the requested window, in creation order.
    pub tasks: Vec<Task>,
    /// Total number of stored tasks.
    pub total: u64,
    /// Number of completed tasks across the whole collection.
    pub completed: u64,
    /// Number of pending tasks across the whole collection.
    pub pending: u64,
}

/// Outcome of a completion toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionToggle {
    /// Identifier of the toggled task.
    pub id: TaskId,
    /// Completion value after the toggle.
    pub completed: bool,
    /// Confirmation message describing the new state.
    pub message: String,
}

/// Outcome of a deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedTask {
    /// Identifier of the removed task.
    pub id: TaskId,
    /// Confirmation message.
    pub message: String,
}

/// Aggregate completion statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStatistics {
    /// Total number of stored tasks.
    pub total: u64,
    /// Number of completed tasks.
    pub completed: u64,
    /// Number of pending tasks.
    pub pending: u64,
    /// Percentage of completed tasks, rounded to two decimal places.
    pub completion_rate: f64,
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task carries the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Storage(TaskRepositoryError),
}

impl TaskServiceError {
    /// Maps a repository failure, folding the repository's not-found signal
    /// into the service-level variant. Storage failures are logged here and
    /// surfaced unchanged; nothing is retried.
    fn from_repository(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => {
                tracing::error!(error = %other, "repository operation failed");
                Self::Storage(other)
            }
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Owns validation of raw input and coordinates repository access, so HTTP
/// handlers stay thin and adapters stay mechanical.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the requested page of tasks together with collection-wide
    /// counters.
    ///
    /// The counters are read independently of the page query, so they stay
    /// meaningful when the window covers only part of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the repository fails.
    pub async fn list_tasks(&self, page: PageRequest) -> TaskServiceResult<TaskPage> {
        let tasks = self
            .repository
            .list(page)
            .await
            .map_err(TaskServiceError::from_repository)?;
        let (total, completed, pending) = self.read_counters().await?;
        Ok(TaskPage {
            tasks,
            total,
            completed,
            pending,
        })
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task carries the
    /// identifier and [`TaskServiceError::Storage`] when lookup fails.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(TaskServiceError::from_repository)?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Validates and stores a new task.
    ///
    /// A missing description defaults to the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the payload fails
    /// validation and [`TaskServiceError::Storage`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = request
            .description
            .map(TaskDescription::new)
            .transpose()?
            .unwrap_or_default();

        let task = Task::new(title, description, &*self.clock);
        self.repository
            .store(&task)
            .await
            .map_err(TaskServiceError::from_repository)?;
        tracing::info!(id = %task.id(), "created task");
        Ok(task)
    }

    /// Validates and applies a partial update to an existing task.
    ///
    /// The payload is validated before the task is looked up, and the
    /// record's `updated_at` refreshes even when every field is absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when a supplied field fails
    /// validation, [`TaskServiceError::NotFound`] when no task carries the
    /// identifier, and [`TaskServiceError::Storage`] when persistence fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let patch = TaskPatch {
            title: request.title.map(TaskTitle::new).transpose()?,
            description: request.description.map(TaskDescription::new).transpose()?,
            completed: request.completed,
        };

        let mut task = self.get_task(id).await?;
        task.apply_patch(patch, &*self.clock);
        self.repository
            .update(&task)
            .await
            .map_err(TaskServiceError::from_repository)?;
        tracing::info!(id = %task.id(), "updated task");
        Ok(task)
    }

    /// Flips a task's completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task carries the
    /// identifier and [`TaskServiceError::Storage`] when persistence fails.
    pub async fn toggle_completion(&self, id: TaskId) -> TaskServiceResult<CompletionToggle> {
        let mut task = self.get_task(id).await?;
        let completed = task.toggle_completion(&*self.clock);
        self.repository
            .update(&task)
            .await
            .map_err(TaskServiceError::from_repository)?;
        tracing::info!(id = %task.id(), completed, "toggled task completion");
        Ok(CompletionToggle {
            id: task.id(),
            completed,
            message: completion_message(completed).to_owned(),
        })
    }

    /// Deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task carries the
    /// identifier and [`TaskServiceError::Storage`] when deletion fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<DeletedTask> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(TaskServiceError::from_repository)?;
        let task = removed.ok_or(TaskServiceError::NotFound(id))?;
        tracing::info!(id = %task.id(), "deleted task");
        Ok(DeletedTask {
            id: task.id(),
            message: "Task deleted successfully".to_owned(),
        })
    }

    /// Returns tasks whose title or description contains the query, compared
    /// case-insensitively, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the query is shorter
    /// than the minimum and [`TaskServiceError::Storage`] when the
    /// repository fails.
    pub async fn search_tasks(&self, query: &str) -> TaskServiceResult<Vec<Task>> {
        let parsed = SearchQuery::new(query)?;
        self.repository
            .search(&parsed)
            .await
            .map_err(TaskServiceError::from_repository)
    }

    /// Returns every completed task in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the repository fails.
    pub async fn completed_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        self.repository
            .find_completed()
            .await
            .map_err(TaskServiceError::from_repository)
    }

    /// Returns every pending task in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the repository fails.
    pub async fn pending_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        self.repository
            .find_pending()
            .await
            .map_err(TaskServiceError::from_repository)
    }

    /// Returns aggregate completion statistics.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the repository fails.
    pub async fn statistics(&self) -> TaskServiceResult<TaskStatistics> {
        let (total, completed, pending) = self.read_counters().await?;
        Ok(TaskStatistics {
            total,
            completed,
            pending,
            completion_rate: completion_rate(completed, total),
        })
    }

    /// Verifies that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the store cannot be
    /// reached.
    pub async fn health(&self) -> TaskServiceResult<()> {
        self.repository
            .ping()
            .await
            .map_err(TaskServiceError::from_repository)
    }

    /// Reads the three collection counters in one place.
    async fn read_counters(&self) -> TaskServiceResult<(u64, u64, u64)> {
        let total = self
            .repository
            .count()
            .await
            .map_err(TaskServiceError::from_repository)?;
        let completed = self
            .repository
            .count_completed()
            .await
            .map_err(TaskServiceError::from_repository)?;
        let pending = self
            .repository
            .count_pending()
            .await
            .map_err(TaskServiceError::from_repository)?;
        Ok((total, completed, pending))
    }
}

/// Confirmation message for a completion toggle outcome.
const fn completion_message(completed: bool) -> &'static str {
    if completed {
        "Task completed successfully"
    } else {
        "Task marked as pending successfully"
    }
}

/// Percentage of completed tasks, rounded to two decimal places.
///
/// An empty collection reads as zero rather than dividing by zero.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "the completion rate is an approximate percentage, not exact accounting"
)]
fn completion_rate(completed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = (completed as f64 / total as f64) * 100.0;
    (rate * 100.0).round() / 100.0
}
