//! Health endpoint reporting storage connectivity.

use super::TaskApi;
use crate::task::ports::TaskRepository;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use mockable::Clock;
use serde::Serialize;

/// Health response body.
#[derive(Debug, Clone, Copy, Serialize)]
struct HealthBody {
    status: &'static str,
    database: &'static str,
}

/// Builds the `/health` route.
pub fn router<R, C>() -> Router<TaskApi<R, C>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new().route("/health", get(health::<R, C>))
}

/// `GET /health` probes storage connectivity.
///
/// Responds 200 when the backing store answers a ping and 503 when it does
/// not, so orchestrators can gate traffic on the status code alone.
#[expect(
    clippy::needless_pass_by_value,
    reason = "axum handlers receive extractors by value per the Handler contract"
)]
async fn health<R, C>(State(service): State<TaskApi<R, C>>) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    match service.health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthBody {
                status: "healthy",
                database: "connected",
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "health probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody {
                    status: "unhealthy",
                    database: "disconnected",
                }),
            )
                .into_response()
        }
    }
}
