/**
 * API Error Types
 *
 * This module defines the error taxonomy for the attendance API. Each
 * variant maps to a fixed HTTP status code; storage and hashing failures
 * are surfaced as a generic server error with the details logged, never
 * returned to the caller.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by HTTP handlers
///
/// # Status Code Mapping
///
/// - `Validation` - 400 Bad Request
/// - `Unauthenticated` - 401 Unauthorized
/// - `NotFound` - 404 Not Found
/// - `Conflict` - 400 Bad Request (uniqueness violation the caller can fix)
/// - `Database`, `Hash`, `Internal` - 500 Internal Server Error
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request fields
    #[error("{0}")]
    Validation(String),

    /// Missing, invalid, or expired bearer token
    #[error("{0}")]
    Unauthenticated(String),

    /// Entity lookup by id failed
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation not absorbed by upsert logic
    #[error("{0}")]
    Conflict(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing error
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Any other internal failure
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message returned to the caller
    ///
    /// Server-side failures collapse to a generic message; the underlying
    /// cause is logged where the error is converted to a response.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::Unauthenticated(message)
            | Self::NotFound(message)
            | Self::Conflict(message) => message.clone(),
            Self::Database(_) | Self::Hash(_) | Self::Internal(_) => "Server error".to_string(),
        }
    }

    /// True when the wrapped database error is a unique-constraint violation
    ///
    /// Used by create paths to surface duplicate keys as `Conflict` instead
    /// of a generic server error.
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        err.as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation())
    }
}
