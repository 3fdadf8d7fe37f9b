//! Currency and country-to-currency catalog.
//!
//! Layers, leaves first:
//!
//! - `validation` - pure shape checks for internal and transport values
//! - `repository` - storage trait and its in-memory implementation
//! - `manager` - business rules (unique codes, first-write-wins links)
//! - `mapper` / `facade` - transport boundary

pub mod error;
pub mod facade;
pub mod manager;
pub mod mapper;
pub mod repository;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use error::CurrencyError;
pub use facade::{CatalogSize, CurrencyFacade};
pub use manager::CurrencyManager;
pub use repository::{CountryLinks, CurrencyRepository, InMemoryCurrencyRepository};
pub use types::{CountryCurrencyLink, CountryWithCurrencyTo, Currency, CurrencyTo};
