//! Business rules for the currency catalog.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

use super::error::CurrencyError;
use super::repository::{CountryLinks, CurrencyRepository};
use super::types::{CountryCurrencyLink, Currency};
use super::validation;

/// Enforces the catalog invariants on top of a [`CurrencyRepository`].
///
/// At most one currency definition exists per code (compared
/// case-insensitively), and every linked currency is registered. All
/// read-modify-write sequences run under one write guard, so concurrent
/// conflicting inserts cannot both succeed.
pub struct CurrencyManager {
    repository: Arc<dyn CurrencyRepository>,
    write_guard: Mutex<()>,
}

impl CurrencyManager {
    /// Creates a manager over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn CurrencyRepository>) -> Self {
        Self {
            repository,
            write_guard: Mutex::new(()),
        }
    }

    /// Returns all currencies. An empty catalog yields an empty set.
    pub async fn get_currencies(&self) -> Result<BTreeSet<Currency>, CurrencyError> {
        info!("Querying storage for all currencies");
        self.repository.list_currencies().await
    }

    /// Looks up a currency by code, ignoring case.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a malformed code, `NotFound` if no currency uses it.
    pub async fn get_currency(&self, code: &str) -> Result<Currency, CurrencyError> {
        validation::validate_currency_code(code)?;
        info!(code, "Querying storage for currency");

        match self.repository.find_currency_by_code(code).await? {
            Some(currency) => {
                info!(code = currency.code(), name = currency.name(), "Found currency");
                Ok(currency)
            }
            None => Err(CurrencyError::NotFound(format!(
                "Currency with short name {code} does not exist"
            ))),
        }
    }

    /// Registers a currency unless an identical one exists, then returns the
    /// full updated set.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the currency is malformed or its code is already
    /// registered under a different name.
    pub async fn add_currency(
        &self,
        currency: Currency,
    ) -> Result<BTreeSet<Currency>, CurrencyError> {
        validation::validate_currency(&currency)?;

        let guard = self.write_guard.lock().await;
        self.add_currency_if_absent(&guard, currency).await?;
        self.repository.list_currencies().await
    }

    /// Returns every country link. An empty catalog yields an empty map.
    pub async fn get_countries_with_currency(&self) -> Result<CountryLinks, CurrencyError> {
        info!("Querying storage for all countries with their currency");
        self.repository.list_country_links().await
    }

    /// Looks up the currency of a country.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a malformed code, `NotFound` if the country has
    /// no currency.
    pub async fn get_country_with_currency(
        &self,
        country_code: &str,
    ) -> Result<Currency, CurrencyError> {
        validation::validate_country_code(country_code)?;
        info!(country = country_code, "Querying storage for currency of country");

        match self.repository.find_currency_by_country(country_code).await? {
            Some(currency) => {
                info!(
                    country = country_code,
                    code = currency.code(),
                    "Found currency of country"
                );
                Ok(currency)
            }
            None => Err(CurrencyError::NotFound(format!(
                "No currency exists for country with short name {country_code}"
            ))),
        }
    }

    /// Links a country to a currency, registering the currency first when it
    /// is new. A country that is already linked keeps its currency.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if either input is malformed or the currency code is
    /// already registered under a different name.
    pub async fn add_country_with_currency(
        &self,
        country_code: &str,
        currency: Currency,
    ) -> Result<CountryLinks, CurrencyError> {
        let (country_code, currency) =
            CountryCurrencyLink::new(country_code, currency)?.into_parts();

        let guard = self.write_guard.lock().await;
        let registered = self.add_currency_if_absent(&guard, currency).await?;

        info!(
            country = %country_code,
            code = registered.code(),
            "Linking currency to country"
        );
        self.repository
            .insert_country_link(country_code, registered)
            .await?;
        self.repository.list_country_links().await
    }

    /// Returns the registered definition for the currency's code, inserting
    /// the candidate when the code is unseen.
    async fn add_currency_if_absent(
        &self,
        _guard: &MutexGuard<'_, ()>,
        currency: Currency,
    ) -> Result<Currency, CurrencyError> {
        validation::validate_currency(&currency)?;

        match self.repository.find_currency_by_code(currency.code()).await? {
            Some(existing) if !existing.has_name(currency.name()) => {
                warn!(
                    code = currency.code(),
                    existing = existing.name(),
                    requested = currency.name(),
                    "Rejected conflicting currency"
                );
                Err(CurrencyError::InvalidArgument(format!(
                    "A currency with the short name {} already exists: {}. \
                     Cannot register two different currencies under the same short name",
                    currency.code(),
                    existing.name()
                )))
            }
            Some(existing) => {
                info!(code = existing.code(), "Currency already registered");
                Ok(existing)
            }
            None => {
                info!(code = currency.code(), name = currency.name(), "Adding new currency");
                self.repository.insert_currency(currency.clone()).await?;
                Ok(currency)
            }
        }
    }
}
