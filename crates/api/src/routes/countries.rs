//! Country with currency routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::get,
};
use catalog_core::currency::CountryWithCurrencyTo;
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the country with currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/countries-with-currency",
            get(list_countries_with_currency).post(create_country_with_currency),
        )
        .route(
            "/countries-with-currency/{country_short_name}",
            get(get_country_with_currency),
        )
}

/// GET `/countries-with-currency` - List all countries with their currency.
async fn list_countries_with_currency(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryWithCurrencyTo>>, ApiError> {
    info!("Resource to get countries with their currency triggered");
    let links = state.currencies.get_countries_with_currency().await?;
    Ok(Json(links))
}

/// GET `/countries-with-currency/{country_short_name}` - Get the currency of a country.
async fn get_country_with_currency(
    State(state): State<AppState>,
    Path(country_short_name): Path<String>,
) -> Result<Json<CountryWithCurrencyTo>, ApiError> {
    info!(%country_short_name, "Resource to get currency of country triggered");
    let link = state
        .currencies
        .get_country_with_currency(&country_short_name)
        .await?;
    Ok(Json(link))
}

/// POST `/countries-with-currency` - Link a country to a currency, returning all links.
async fn create_country_with_currency(
    State(state): State<AppState>,
    payload: Result<Json<Option<CountryWithCurrencyTo>>, JsonRejection>,
) -> Result<Json<Vec<CountryWithCurrencyTo>>, ApiError> {
    let Json(link) = payload?;
    info!(?link, "Resource to add currency to country triggered");
    let links = state
        .currencies
        .add_country_with_currency(link.as_ref())
        .await?;
    Ok(Json(links))
}
