//! Storage for currencies and country links.
//!
//! The repository is a plain store: it performs no validation and applies no
//! business rules. Duplicate detection by code lives in
//! [`CurrencyManager`](super::manager::CurrencyManager).

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::CurrencyError;
use super::types::Currency;

/// Mapping from country code to the currency used there.
pub type CountryLinks = BTreeMap<String, Currency>;

/// Storage primitives for the currency catalog.
#[async_trait]
pub trait CurrencyRepository: Send + Sync {
    /// Returns every stored currency.
    async fn list_currencies(&self) -> Result<BTreeSet<Currency>, CurrencyError>;

    /// Finds a currency whose code matches `code`, ignoring case.
    async fn find_currency_by_code(&self, code: &str) -> Result<Option<Currency>, CurrencyError>;

    /// Adds a currency. Inserting a value-equal currency again is a no-op.
    async fn insert_currency(&self, currency: Currency) -> Result<(), CurrencyError>;

    /// Returns every country link.
    async fn list_country_links(&self) -> Result<CountryLinks, CurrencyError>;

    /// Finds the currency linked to `country_code`.
    async fn find_currency_by_country(
        &self,
        country_code: &str,
    ) -> Result<Option<Currency>, CurrencyError>;

    /// Registers `currency` and links it to `country_code` unless the country
    /// is already linked. An existing link is never overwritten.
    async fn insert_country_link(
        &self,
        country_code: String,
        currency: Currency,
    ) -> Result<(), CurrencyError>;
}

#[derive(Debug, Default)]
struct CatalogState {
    currencies: BTreeSet<Currency>,
    links: CountryLinks,
}

/// In-memory implementation of [`CurrencyRepository`].
///
/// Both collections sit behind a single lock so a link insert registers its
/// currency and the mapping in one step. State lives for the process only.
#[derive(Debug, Default)]
pub struct InMemoryCurrencyRepository {
    state: RwLock<CatalogState>,
}

impl InMemoryCurrencyRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the built-in catalog: Euro and Pound,
    /// with Germany and France on the Euro and Scotland on the Pound.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a seed entry fails validation.
    pub fn with_seed_data() -> Result<Self, CurrencyError> {
        let euro = Currency::new("EUR", "Euro")?;
        // Seed code is "GPD", kept as shipped.
        let pound = Currency::new("GPD", "Pound")?;

        let mut state = CatalogState::default();
        state.currencies.insert(euro.clone());
        state.currencies.insert(pound.clone());
        state.links.entry("GER".to_string()).or_insert(euro.clone());
        state.links.entry("FRA".to_string()).or_insert(euro);
        state.links.entry("SCO".to_string()).or_insert(pound);

        Ok(Self {
            state: RwLock::new(state),
        })
    }
}

#[async_trait]
impl CurrencyRepository for InMemoryCurrencyRepository {
    async fn list_currencies(&self) -> Result<BTreeSet<Currency>, CurrencyError> {
        Ok(self.state.read().await.currencies.clone())
    }

    async fn find_currency_by_code(&self, code: &str) -> Result<Option<Currency>, CurrencyError> {
        let state = self.state.read().await;
        Ok(state.currencies.iter().find(|c| c.has_code(code)).cloned())
    }

    async fn insert_currency(&self, currency: Currency) -> Result<(), CurrencyError> {
        self.state.write().await.currencies.insert(currency);
        Ok(())
    }

    async fn list_country_links(&self) -> Result<CountryLinks, CurrencyError> {
        Ok(self.state.read().await.links.clone())
    }

    async fn find_currency_by_country(
        &self,
        country_code: &str,
    ) -> Result<Option<Currency>, CurrencyError> {
        Ok(self.state.read().await.links.get(country_code).cloned())
    }

    async fn insert_country_link(
        &self,
        country_code: String,
        currency: Currency,
    ) -> Result<(), CurrencyError> {
        let mut state = self.state.write().await;
        state.currencies.insert(currency.clone());
        state.links.entry(country_code).or_insert(currency);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(code: &str, name: &str) -> Currency {
        Currency::new(code, name).unwrap()
    }

    #[tokio::test]
    async fn test_new_repository_is_empty() {
        let repo = InMemoryCurrencyRepository::new();
        assert!(repo.list_currencies().await.unwrap().is_empty());
        assert!(repo.list_country_links().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_data() {
        let repo = InMemoryCurrencyRepository::with_seed_data().unwrap();

        let currencies = repo.list_currencies().await.unwrap();
        assert_eq!(currencies.len(), 2);
        assert!(currencies.contains(&currency("EUR", "Euro")));
        assert!(currencies.contains(&currency("GPD", "Pound")));

        let links = repo.list_country_links().await.unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(links["GER"], currency("EUR", "Euro"));
        assert_eq!(links["FRA"], currency("EUR", "Euro"));
        assert_eq!(links["SCO"], currency("GPD", "Pound"));
    }

    #[tokio::test]
    async fn test_find_by_code_ignores_case() {
        let repo = InMemoryCurrencyRepository::with_seed_data().unwrap();
        let found = repo.find_currency_by_code("eur").await.unwrap();
        assert_eq!(found, Some(currency("EUR", "Euro")));
        assert_eq!(repo.find_currency_by_code("USD").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_currency_is_idempotent_by_value() {
        let repo = InMemoryCurrencyRepository::new();
        repo.insert_currency(currency("USD", "Dollar")).await.unwrap();
        repo.insert_currency(currency("USD", "Dollar")).await.unwrap();
        assert_eq!(repo.list_currencies().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_currency_does_not_dedupe_by_code() {
        let repo = InMemoryCurrencyRepository::new();
        repo.insert_currency(currency("USD", "Dollar")).await.unwrap();
        repo.insert_currency(currency("USD", "US Dollar")).await.unwrap();
        assert_eq!(repo.list_currencies().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_insert_country_link_first_write_wins() {
        let repo = InMemoryCurrencyRepository::with_seed_data().unwrap();
        repo.insert_country_link("GER".into(), currency("DEM", "Mark"))
            .await
            .unwrap();

        assert_eq!(
            repo.find_currency_by_country("GER").await.unwrap(),
            Some(currency("EUR", "Euro"))
        );
        // The currency is still registered.
        assert!(
            repo.list_currencies()
                .await
                .unwrap()
                .contains(&currency("DEM", "Mark"))
        );
    }

    #[tokio::test]
    async fn test_find_by_country_is_exact() {
        let repo = InMemoryCurrencyRepository::with_seed_data().unwrap();
        assert!(repo.find_currency_by_country("GER").await.unwrap().is_some());
        assert!(repo.find_currency_by_country("ger").await.unwrap().is_none());
    }
}
