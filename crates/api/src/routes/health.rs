//! Liveness endpoint reporting the catalog's size.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{ApiError, AppState};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of registered currencies.
    pub currencies: usize,
    /// Number of countries linked to a currency.
    pub countries: usize,
}

/// Reports liveness; a failing store surfaces as `500`.
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let size = state.currencies.catalog_size().await?;
    Ok(Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        currencies: size.currencies,
        countries: size.countries,
    }))
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
