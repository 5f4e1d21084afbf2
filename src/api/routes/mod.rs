//! Route handlers and router assembly for the task store API.

mod health;
mod tasks;

use crate::task::{ports::TaskRepository, services::TaskService};
use axum::Router;
use mockable::Clock;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared service handle stored in router state.
pub type TaskApi<R, C> = Arc<TaskService<R, C>>;

/// Builds the application router with the CORS policy applied.
///
/// The service handle becomes the router state, so every handler reaches the
/// same repository and clock the binary wired up.
#[must_use]
pub fn router<R, C>(service: TaskApi<R, C>, cors: CorsLayer) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .merge(tasks::router())
        .merge(health::router())
        .layer(cors)
        .with_state(service)
}
