//! Unified error handling
//!
//! [`AppError`] is the API-boundary error type. Storage failures
//! ([`RepoError`]) fold into it, and every failure renders as
//! `{"error": message}` with the mapped HTTP status:
//!
//! | Variant | Status |
//! |---------|--------|
//! | BadRequest | 400 |
//! | NotFound | 404 |
//! | Database | 500 |
//! | Internal | 500 |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::repository::RepoError;

/// Wire shape of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing required field on create (400)
    #[error("{0}")]
    BadRequest(String),

    /// Lookup or update on a nonexistent id (404)
    #[error("{0}")]
    NotFound(String),

    /// Storage failure, surfaced with the underlying message (500)
    #[error("{0}")]
    Database(String),

    /// Anything else (500)
    #[error("{0}")]
    Internal(String),
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;
