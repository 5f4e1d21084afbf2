//! Route handlers for the `/tasks` resource.

#![expect(
    clippy::needless_pass_by_value,
    reason = "axum handlers receive extractors by value per the Handler contract"
)]

use super::TaskApi;
use crate::api::error::{ApiError, ApiResult};
use crate::task::{
    domain::{PageRequest, Task, TaskId},
    ports::TaskRepository,
    services::{
        CompletionToggle, CreateTaskRequest, DeletedTask, TaskPage, TaskStatistics,
        UpdateTaskRequest,
    },
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
};
use mockable::Clock;
use serde::Deserialize;

/// Query parameters for the listing endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct ListParams {
    #[serde(default)]
    skip: Option<u64>,
    #[serde(default)]
    limit: Option<u64>,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

/// Builds the `/tasks` route tree.
///
/// Literal segments (`search`, `completed`, `pending`, `stats`) coexist with
/// the `{id}` capture; the router prefers the literal match.
pub fn router<R, C>() -> Router<TaskApi<R, C>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/tasks", get(list_tasks::<R, C>).post(create_task::<R, C>))
        .route("/tasks/search", get(search_tasks::<R, C>))
        .route("/tasks/completed", get(completed_tasks::<R, C>))
        .route("/tasks/pending", get(pending_tasks::<R, C>))
        .route("/tasks/stats", get(statistics::<R, C>))
        .route(
            "/tasks/{id}",
            get(get_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .route("/tasks/{id}/toggle", patch(toggle_completion::<R, C>))
}

/// Parses a path id, mapping unparseable values to the same not-found shape
/// used for absent records.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    TaskId::parse(raw).ok_or_else(|| ApiError::unknown_task(raw))
}

/// `GET /tasks` returns a page of tasks plus collection counters.
async fn list_tasks<R, C>(
    State(service): State<TaskApi<R, C>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<TaskPage>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let page = PageRequest::new(
        params.skip.unwrap_or(0),
        params.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
    )
    .map_err(|err| ApiError::validation(&err))?;
    let listing = service.list_tasks(page).await?;
    Ok(Json(listing))
}

/// `POST /tasks` creates a task.
async fn create_task<R, C>(
    State(service): State<TaskApi<R, C>>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = service.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /tasks/{id}` fetches a single task.
async fn get_task<R, C>(
    State(service): State<TaskApi<R, C>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Task>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;
    let task = service.get_task(task_id).await?;
    Ok(Json(task))
}

/// `PUT /tasks/{id}` partially updates a task.
async fn update_task<R, C>(
    State(service): State<TaskApi<R, C>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;
    let task = service.update_task(task_id, request).await?;
    Ok(Json(task))
}

/// `PATCH /tasks/{id}/toggle` flips a task's completion flag.
async fn toggle_completion<R, C>(
    State(service): State<TaskApi<R, C>>,
    Path(id): Path<String>,
) -> ApiResult<Json<CompletionToggle>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;
    let outcome = service.toggle_completion(task_id).await?;
    Ok(Json(outcome))
}

/// `DELETE /tasks/{id}` removes a task.
async fn delete_task<R, C>(
    State(service): State<TaskApi<R, C>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedTask>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;
    let outcome = service.delete_task(task_id).await?;
    Ok(Json(outcome))
}

/// `GET /tasks/search?q=` performs a case-insensitive substring search.
async fn search_tasks<R, C>(
    State(service): State<TaskApi<R, C>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Task>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = service.search_tasks(&params.q).await?;
    Ok(Json(tasks))
}

/// `GET /tasks/completed` returns every completed task.
async fn completed_tasks<R, C>(
    State(service): State<TaskApi<R, C>>,
) -> ApiResult<Json<Vec<Task>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = service.completed_tasks().await?;
    Ok(Json(tasks))
}

/// `GET /tasks/pending` returns every pending task.
async fn pending_tasks<R, C>(State(service): State<TaskApi<R, C>>) -> ApiResult<Json<Vec<Task>>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = service.pending_tasks().await?;
    Ok(Json(tasks))
}

/// `GET /tasks/stats` reports aggregate completion statistics.
async fn statistics<R, C>(
    State(service): State<TaskApi<R, C>>,
) -> ApiResult<Json<TaskStatistics>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let stats = service.statistics().await?;
    Ok(Json(stats))
}
