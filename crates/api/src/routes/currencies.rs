//! Currency routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::get,
};
use catalog_core::currency::CurrencyTo;
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies).post(create_currency))
        .route("/currencies/{short_name}", get(get_currency))
}

/// GET `/currencies` - List all currencies.
async fn list_currencies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CurrencyTo>>, ApiError> {
    info!("Resource to get all currencies triggered");
    let currencies = state.currencies.get_currencies().await?;
    Ok(Json(currencies))
}

/// GET `/currencies/{short_name}` - Get one currency by short name.
async fn get_currency(
    State(state): State<AppState>,
    Path(short_name): Path<String>,
) -> Result<Json<CurrencyTo>, ApiError> {
    info!(%short_name, "Resource to get currency triggered");
    let currency = state.currencies.get_currency(&short_name).await?;
    Ok(Json(currency))
}

/// POST `/currencies` - Register a currency, returning the updated list.
async fn create_currency(
    State(state): State<AppState>,
    payload: Result<Json<Option<CurrencyTo>>, JsonRejection>,
) -> Result<Json<Vec<CurrencyTo>>, ApiError> {
    let Json(currency) = payload?;
    info!(?currency, "Resource to create currency triggered");
    let currencies = state.currencies.add_currency(currency.as_ref()).await?;
    Ok(Json(currencies))
}
