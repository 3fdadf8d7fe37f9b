//! API error handling.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_core::currency::CurrencyError;
use catalog_shared::AppError;
use serde_json::json;
use tracing::{debug, error, warn};

/// Error returned by handlers, rendered as `{ "error", "message" }`.
///
/// `EmptyResult` renders as `204 No Content` without a body.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CurrencyError> for ApiError {
    fn from(err: CurrencyError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::InvalidArgument(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if let AppError::EmptyResult(message) = &err {
            debug!(%message, "Returning no content");
            return StatusCode::NO_CONTENT.into_response();
        }

        if err.is_client_error() {
            warn!(error = %err, "Request rejected");
        } else {
            error!(error = %err, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": err.error_code(),
                "message": err.message()
            })),
        )
            .into_response()
    }
}
