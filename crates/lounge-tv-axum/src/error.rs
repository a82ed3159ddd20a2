//! Axum-specific error types and mappings.
//!
//! This module maps `CoreError` to HTTP status codes and JSON response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lounge_tv_core::{CoreError, RunnerError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input). Nothing was sent to the TV.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The control tool ran and failed.
    #[error("Command failed: {0}")]
    ExecutionFailed(String),

    /// The control tool could not be started.
    #[error("Command could not be started: {0}")]
    SpawnFailed(String),

    /// The control tool was stopped before it finished.
    #[error("Command cancelled: {0}")]
    Cancelled(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Cancelled(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::ExecutionFailed(_) | Self::SpawnFailed(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable error type discriminant for client-side handling.
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "VALIDATION_FAILED",
            Self::ExecutionFailed(_) => "EXECUTION_FAILED",
            Self::SpawnFailed(_) => "SPAWN_FAILED",
            Self::Cancelled(_) => "CANCELLED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg)
            | Self::ExecutionFailed(msg)
            | Self::SpawnFailed(msg)
            | Self::Cancelled(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    status: u16,
    #[serde(rename = "type")]
    error_type: &'static str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
            error_type: self.error_type(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Runner(runner_err) => runner_err.into(),
        }
    }
}

impl From<RunnerError> for HttpError {
    fn from(err: RunnerError) -> Self {
        let msg = err.to_string();
        match err {
            RunnerError::Execution { .. } => Self::ExecutionFailed(msg),
            RunnerError::Spawn { .. } => Self::SpawnFailed(msg),
            RunnerError::Cancelled { .. } => Self::Cancelled(msg),
            RunnerError::Io(_) => Self::Internal(msg),
        }
    }
}
