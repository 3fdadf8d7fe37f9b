//! Currency catalog error types.

use catalog_shared::AppError;
use thiserror::Error;

/// Currency catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Input is missing, malformed, or conflicts with a registered currency.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Lookup by code or country code found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A collection query returned no entries.
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CurrencyError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            CurrencyError::NotFound(msg) => Self::NotFound(msg),
            CurrencyError::EmptyResult(msg) => Self::EmptyResult(msg),
            CurrencyError::Storage(msg) => Self::Internal(msg),
        }
    }
}
