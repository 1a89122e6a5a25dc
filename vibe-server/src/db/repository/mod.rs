//! Repository Module
//!
//! CRUD primitives for the four entity tables: free async functions over
//! `&SqlitePool`, one module per entity. Multi-statement cascades run in
//! explicit transactions.

pub mod menu;
pub mod order;
pub mod reservation;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
