//! Custom error types for the common library
//!
//! This module defines the store-level error type shared by every service
//! that talks to the catalog database.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// PostgreSQL error code raised when a unique index rejects a write
const UNIQUE_VIOLATION: &str = "23505";

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// A unique constraint rejected the write
    #[error("Database conflict: {0}")]
    Conflict(String),

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// Classify an error returned by a query, separating unique-index
    /// violations from every other failure
    pub fn from_query(err: SqlxError) -> Self {
        let conflict = err
            .as_database_error()
            .filter(|db| db.code().as_deref() == Some(UNIQUE_VIOLATION))
            .map(|db| db.message().to_string());

        match conflict {
            Some(message) => DatabaseError::Conflict(message),
            None => DatabaseError::Query(err),
        }
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
