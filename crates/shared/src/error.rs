//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Input failed validation or conflicts with an existing entry.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A collection query legitimately returned nothing.
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidArgument(_) => 400,
            Self::NotFound(_) => 404,
            Self::EmptyResult(_) => 204,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::EmptyResult(_) => "EMPTY_RESULT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the human-readable message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg)
            | Self::NotFound(msg)
            | Self::EmptyResult(msg)
            | Self::Internal(msg) => msg.as_str(),
        }
    }

    /// Whether the error is a client fault (4xx or the 204 signal).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
