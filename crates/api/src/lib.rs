//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for currencies and countries with currency
//! - Error to HTTP response mapping
//! - Shared application state

pub mod error;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::{Router, response::IntoResponse, response::Response};
use catalog_core::currency::{CurrencyFacade, CurrencyManager, CurrencyRepository};
use catalog_shared::AppError;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Transport-facing currency catalog.
    pub currencies: CurrencyFacade,
}

impl AppState {
    /// Wraps an already constructed facade.
    #[must_use]
    pub const fn new(currencies: CurrencyFacade) -> Self {
        Self { currencies }
    }

    /// Wires manager and facade on top of the given repository.
    #[must_use]
    pub fn from_repository(repository: Arc<dyn CurrencyRepository>) -> Self {
        let manager = CurrencyManager::new(repository);
        Self::new(CurrencyFacade::new(Arc::new(manager)))
    }
}

/// Creates the main application router.
///
/// A panicking handler ends its own request with `500 INTERNAL_ERROR`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .with_state(state)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(%detail, "Handler panicked");

    ApiError(AppError::Internal("Unexpected internal failure".to_string())).into_response()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use async_trait::async_trait;
    use axum::http::StatusCode;
    use catalog_core::currency::{CountryLinks, Currency, CurrencyError};
    use serde_json::json;

    use super::*;
    use crate::routes::test_helpers::{seeded_app, send};

    /// How every operation of [`FaultyRepository`] fails.
    #[derive(Clone, Copy)]
    enum Fault {
        Panic,
        Storage,
    }

    struct FaultyRepository(Fault);

    impl FaultyRepository {
        fn fail<T>(&self) -> Result<T, CurrencyError> {
            match self.0 {
                Fault::Panic => panic!("currency store unavailable"),
                Fault::Storage => Err(CurrencyError::Storage(
                    "currency store unavailable".to_string(),
                )),
            }
        }
    }

    #[async_trait]
    impl CurrencyRepository for FaultyRepository {
        async fn list_currencies(&self) -> Result<BTreeSet<Currency>, CurrencyError> {
            self.fail()
        }

        async fn find_currency_by_code(
            &self,
            _code: &str,
        ) -> Result<Option<Currency>, CurrencyError> {
            self.fail()
        }

        async fn insert_currency(&self, _currency: Currency) -> Result<(), CurrencyError> {
            self.fail()
        }

        async fn list_country_links(&self) -> Result<CountryLinks, CurrencyError> {
            self.fail()
        }

        async fn find_currency_by_country(
            &self,
            _country_code: &str,
        ) -> Result<Option<Currency>, CurrencyError> {
            self.fail()
        }

        async fn insert_country_link(
            &self,
            _country_code: String,
            _currency: Currency,
        ) -> Result<(), CurrencyError> {
            self.fail()
        }
    }

    fn faulty_app(fault: Fault) -> Router {
        create_router(AppState::from_repository(Arc::new(FaultyRepository(fault))))
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_internal_error() {
        let (status, body) =
            send(faulty_app(Fault::Panic), "GET", "/api/v1/currencies", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body.unwrap(),
            json!({ "error": "INTERNAL_ERROR", "message": "Unexpected internal failure" })
        );
    }

    #[tokio::test]
    async fn test_router_serves_after_a_panic() {
        let app = faulty_app(Fault::Panic);
        let (first, _) = send(app.clone(), "GET", "/api/v1/countries-with-currency", None).await;
        let (second, _) = send(app, "GET", "/api/v1/currencies/EUR", None).await;
        assert_eq!(first, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(second, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = send(seeded_app(), "GET", "/api/v1/currencies", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_storage_failure_returns_internal_error() {
        let app = faulty_app(Fault::Storage);
        for uri in [
            "/api/v1/currencies",
            "/api/v1/currencies/EUR",
            "/api/v1/countries-with-currency",
            "/api/v1/health",
        ] {
            let (status, body) = send(app.clone(), "GET", uri, None).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body.unwrap()["error"], "INTERNAL_ERROR");
        }
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_before_storage() {
        let (status, _) = send(
            faulty_app(Fault::Storage),
            "GET",
            "/api/v1/currencies/EURO",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
