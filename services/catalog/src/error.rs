//! Custom error types for the catalog service

use async_graphql::ErrorExtensions;
use thiserror::Error;
use tracing::error;

/// Custom error type for the catalog service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed argument, rejected before the store is touched
    #[error("{0}")]
    Validation(String),

    /// Sign-up with an email that already has an account
    #[error("This email is already taken. Try another one.")]
    DuplicateEmail,

    /// Login with an email that has no account
    #[error("User with this email not found.")]
    UserNotFound,

    /// Login with the wrong password
    #[error("Invalid email or password. Try again.")]
    InvalidCredentials,

    /// Password hashing or verification failed
    #[error("Failed to process password")]
    PasswordHashing,

    /// Token signing failed
    #[error("Failed to issue token")]
    Token,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] common::error::DatabaseError),
}

impl ApiError {
    /// Machine-readable code exposed in the GraphQL error extensions
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::DuplicateEmail => "DUPLICATE_EMAIL",
            ApiError::UserNotFound => "USER_NOT_FOUND",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::PasswordHashing | ApiError::Token | ApiError::Database(_) => {
                "INTERNAL_SERVER_ERROR"
            }
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let message = match self {
            ApiError::Database(e) => {
                error!("Database error: {}", e);
                "Database error".to_string()
            }
            ApiError::PasswordHashing | ApiError::Token => {
                error!("Internal error: {}", self);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        async_graphql::Error::new(message).extend_with(|_, e| e.set("code", self.code()))
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
