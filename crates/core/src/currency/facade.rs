//! Transport-facing entry point for the currency catalog.

use std::sync::Arc;

use super::error::CurrencyError;
use super::manager::CurrencyManager;
use super::mapper;
use super::types::{CountryWithCurrencyTo, CurrencyTo};
use super::validation;

/// Number of entries held by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSize {
    /// Registered currencies.
    pub currencies: usize,
    /// Countries linked to a currency.
    pub countries: usize,
}

/// Accepts and returns transport shapes, delegating to [`CurrencyManager`].
///
/// Collection queries that find nothing fail with `EmptyResult` here; the
/// manager itself always returns whatever it holds.
#[derive(Clone)]
pub struct CurrencyFacade {
    manager: Arc<CurrencyManager>,
}

impl CurrencyFacade {
    /// Creates a facade over the given manager.
    #[must_use]
    pub const fn new(manager: Arc<CurrencyManager>) -> Self {
        Self { manager }
    }

    /// Counts registered currencies and linked countries. Never signals
    /// `EmptyResult`.
    pub async fn catalog_size(&self) -> Result<CatalogSize, CurrencyError> {
        Ok(CatalogSize {
            currencies: self.manager.get_currencies().await?.len(),
            countries: self.manager.get_countries_with_currency().await?.len(),
        })
    }

    /// Returns all currencies ordered by code.
    ///
    /// # Errors
    ///
    /// `EmptyResult` if no currency exists.
    pub async fn get_currencies(&self) -> Result<Vec<CurrencyTo>, CurrencyError> {
        let currencies = self.manager.get_currencies().await?;
        if currencies.is_empty() {
            return Err(CurrencyError::EmptyResult(
                "No currencies are existing".to_string(),
            ));
        }
        currencies.iter().map(mapper::to_transport).collect()
    }

    /// Returns the currency with the given short name.
    pub async fn get_currency(&self, short_name: &str) -> Result<CurrencyTo, CurrencyError> {
        validation::validate_currency_code(short_name)?;
        let currency = self.manager.get_currency(short_name).await?;
        mapper::to_transport(&currency)
    }

    /// Registers a currency and returns the full updated list.
    pub async fn add_currency(
        &self,
        currency: Option<&CurrencyTo>,
    ) -> Result<Vec<CurrencyTo>, CurrencyError> {
        let currency = mapper::from_transport(currency)?;
        let currencies = self.manager.add_currency(currency).await?;
        currencies.iter().map(mapper::to_transport).collect()
    }

    /// Returns all countries with their currency ordered by country code.
    ///
    /// # Errors
    ///
    /// `EmptyResult` if no country is linked.
    pub async fn get_countries_with_currency(
        &self,
    ) -> Result<Vec<CountryWithCurrencyTo>, CurrencyError> {
        let links = self.manager.get_countries_with_currency().await?;
        if links.is_empty() {
            return Err(CurrencyError::EmptyResult(
                "No countries with currencies are available".to_string(),
            ));
        }
        links
            .iter()
            .map(|(country, currency)| mapper::link_to_transport(country, currency))
            .collect()
    }

    /// Returns the given country together with its currency.
    pub async fn get_country_with_currency(
        &self,
        country_short_name: &str,
    ) -> Result<CountryWithCurrencyTo, CurrencyError> {
        validation::validate_country_code(country_short_name)?;
        let currency = self
            .manager
            .get_country_with_currency(country_short_name)
            .await?;
        mapper::link_to_transport(country_short_name, &currency)
    }

    /// Links a country to a currency and returns all links.
    pub async fn add_country_with_currency(
        &self,
        link: Option<&CountryWithCurrencyTo>,
    ) -> Result<Vec<CountryWithCurrencyTo>, CurrencyError> {
        let (country, currency) = validation::validate_country_with_currency_to(link)?;
        let currency = mapper::from_transport(Some(currency))?;
        let links = self
            .manager
            .add_country_with_currency(country, currency)
            .await?;
        links
            .iter()
            .map(|(country, currency)| mapper::link_to_transport(country, currency))
            .collect()
    }
}
