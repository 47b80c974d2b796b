//! Global application error types and handlers.
//!
//! This module defines the error types used across the backend: startup
//! failures (`AppError`), storage failures (`StorageError`), the domain errors
//! every resolver reports (`BlogError`), and the transport-level `ApiError`
//! that knows how to render itself as an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;

/// Message reported whenever a post lookup misses, whether the post is absent
/// or owned by someone else.
pub const POST_NOT_FOUND: &str = "Post does not exist";

/// Process-level errors raised while starting or running the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<::config::ConfigError> for AppError {
    fn from(err: ::config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Errors raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness violation
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Referential or immutability constraint violated
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Backend failure
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Domain errors reported by account and post operations.
///
/// Mutations never let these escape as transport failures; they are folded
/// into a `{success: false, errors}` payload using [`BlogError::public_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlogError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{}", POST_NOT_FOUND)]
    PostNotFound,

    #[error("A user with that username already exists.")]
    UsernameTaken,

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl BlogError {
    /// Message safe to hand back to a caller.
    pub fn public_message(&self) -> String {
        match self {
            BlogError::Storage(err) => {
                tracing::warn!(error = %err, "Storage failure surfaced to caller");
                "Internal error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            BlogError::Auth(_) => "AUTH_ERROR",
            BlogError::PostNotFound => "NOT_FOUND",
            BlogError::UsernameTaken => "CONFLICT",
            BlogError::Validation(_) => "VALIDATION_ERROR",
            BlogError::Storage(_) => "INTERNAL_ERROR",
        }
    }
}

/// Transport-level errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Bad request
    #[error("{0}")]
    BadRequest(String),

    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::PostNotFound => ApiError::NotFound(POST_NOT_FOUND.to_string()),
            BlogError::Storage(err) => {
                tracing::warn!(error = %err, "Storage failure on read path");
                ApiError::Internal
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for process-level operations
pub type AppResult<T> = Result<T, AppError>;
