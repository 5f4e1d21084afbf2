//! In-memory repository for task storage without a database.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{PageRequest, SearchQuery, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Records are held in insertion order, which doubles as creation order
/// because identifiers and timestamps are assigned before storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskRepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskRepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

/// Case-insensitive substring match against title and description.
fn matches_query(task: &Task, needle: &str) -> bool {
    task.title().as_str().to_lowercase().contains(needle)
        || task.description().as_str().to_lowercase().contains(needle)
}

/// Narrows a validated pagination value to an iterator offset.
fn to_offset(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Widens a collection length to the port's count type.
fn to_count(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        if state.tasks.iter().any(|stored| stored.id() == task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.iter().find(|stored| stored.id() == id).cloned())
    }

    async fn list(&self, page: PageRequest) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .iter()
            .skip(to_offset(page.skip()))
            .take(to_offset(page.limit()))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let mut state = self.write_state()?;
        let position = state.tasks.iter().position(|stored| stored.id() == id);
        Ok(position.map(|index| state.tasks.remove(index)))
    }

    async fn search(&self, query: &SearchQuery) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        let needle = query.as_str().to_lowercase();
        Ok(state
            .tasks
            .iter()
            .filter(|task| matches_query(task, &needle))
            .cloned()
            .collect())
    }

    async fn find_completed(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.completed())
            .cloned()
            .collect())
    }

    async fn find_pending(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| !task.completed())
            .cloned()
            .collect())
    }

    async fn count(&self) -> TaskRepositoryResult<u64> {
        let state = self.read_state()?;
        Ok(to_count(state.tasks.len()))
    }

    async fn count_completed(&self) -> TaskRepositoryResult<u64> {
        let state = self.read_state()?;
        Ok(to_count(
            state.tasks.iter().filter(|task| task.completed()).count(),
        ))
    }

    async fn count_pending(&self) -> TaskRepositoryResult<u64> {
        let state = self.read_state()?;
        Ok(to_count(
            state.tasks.iter().filter(|task| !task.completed()).count(),
        ))
    }

    async fn ping(&self) -> TaskRepositoryResult<()> {
        self.read_state().map(|_| ())
    }
}
