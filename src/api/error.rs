//! HTTP error mapping for the task store API.

use crate::task::{
    domain::{TaskId, TaskValidationError},
    services::TaskServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Structured HTTP error response.
///
/// `detail` carries the human-readable reason and `error_code` a stable
/// machine code; validation failures additionally name the offending input
/// in `field`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    detail: String,
    error_code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl ApiError {
    /// Builds the 404 body for a path id that names no stored task.
    #[must_use]
    pub fn unknown_task(raw_id: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: format!("task not found: {raw_id}"),
            error_code: "TASK_NOT_FOUND",
            field: None,
        }
    }

    /// Builds the 404 body for a missing task.
    #[must_use]
    pub fn not_found(id: TaskId) -> Self {
        Self::unknown_task(&id.to_string())
    }

    /// Builds the 400 body naming the offending field.
    #[must_use]
    pub fn validation(err: &TaskValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: err.to_string(),
            error_code: "TASK_VALIDATION_ERROR",
            field: Some(err.field()),
        }
    }

    /// Builds the 500 body for a storage failure.
    ///
    /// The driver detail stays in the server logs (the service records it)
    /// and never reaches the client.
    #[must_use]
    pub fn storage() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "storage backend failure".to_owned(),
            error_code: "DATABASE_ERROR",
            field: None,
        }
    }

    /// Returns the HTTP status this error renders with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::NotFound(id) => Self::not_found(id),
            TaskServiceError::Validation(validation) => Self::validation(&validation),
            TaskServiceError::Storage(_) => Self::storage(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
