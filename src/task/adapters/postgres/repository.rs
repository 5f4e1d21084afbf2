//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PageRequest, PersistedTaskData, SearchQuery, Task, TaskDescription, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, page: PageRequest) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let offset = i64::try_from(page.skip()).map_err(TaskRepositoryError::persistence)?;
            let limit = i64::try_from(page.limit()).map_err(TaskRepositoryError::persistence)?;
            let rows = tasks::table
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .offset(offset)
                .limit(limit)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn search(&self, query: &SearchQuery) -> TaskRepositoryResult<Vec<Task>> {
        let pattern = like_pattern(query.as_str());
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(
                    tasks::title
                        .ilike(&pattern)
                        .or(tasks::description.ilike(&pattern)),
                )
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_completed(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| load_by_completion(connection, true))
            .await
    }

    async fn find_pending(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| load_by_completion(connection, false))
            .await
    }

    async fn count(&self) -> TaskRepositoryResult<u64> {
        self.run_blocking(|connection| {
            let total = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(total).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn count_completed(&self) -> TaskRepositoryResult<u64> {
        self.run_blocking(|connection| count_by_completion(connection, true))
            .await
    }

    async fn count_pending(&self) -> TaskRepositoryResult<u64> {
        self.run_blocking(|connection| count_by_completion(connection, false))
            .await
    }

    async fn ping(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            diesel::sql_query("SELECT 1")
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        completed: task.completed(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        completed: task.completed(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        description: persisted_description,
        completed,
        created_at,
        updated_at,
    } = row;

    // Rows are written through validated domain values, so a failure here
    // points at out-of-band edits to the table.
    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let description =
        TaskDescription::new(persisted_description).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        completed,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

/// Builds a `%needle%` pattern with LIKE wildcards escaped, so the query
/// text is matched literally.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn load_by_completion(
    connection: &mut PgConnection,
    completed: bool,
) -> TaskRepositoryResult<Vec<Task>> {
    let rows = tasks::table
        .filter(tasks::completed.eq(completed))
        .order((tasks::created_at.asc(), tasks::id.asc()))
        .select(TaskRow::as_select())
        .load::<TaskRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;
    rows.into_iter().map(row_to_task).collect()
}

fn count_by_completion(connection: &mut PgConnection, completed: bool) -> TaskRepositoryResult<u64> {
    let total = tasks::table
        .filter(tasks::completed.eq(completed))
        .count()
        .get_result::<i64>(connection)
        .map_err(TaskRepositoryError::persistence)?;
    u64::try_from(total).map_err(TaskRepositoryError::persistence)
}
