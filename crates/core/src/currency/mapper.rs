//! Conversions between transport and internal shapes.
//!
//! Both directions re-run validation, so nothing crosses the boundary
//! unchecked. Inbound failures are the caller's fault (`InvalidArgument`);
//! outbound failures mean stored data is corrupt (`Storage`).

use super::error::CurrencyError;
use super::types::{CountryWithCurrencyTo, Currency, CurrencyTo};
use super::validation;

/// Maps an internal currency to its transport shape.
///
/// # Errors
///
/// `Storage` if the stored currency no longer passes validation.
pub fn to_transport(currency: &Currency) -> Result<CurrencyTo, CurrencyError> {
    validation::validate_currency(currency).map_err(|err| corrupt("currency", &err))?;
    Ok(CurrencyTo::new(currency.code(), currency.name()))
}

/// Maps a transport currency to an internal one.
pub fn from_transport(currency: Option<&CurrencyTo>) -> Result<Currency, CurrencyError> {
    let (short_name, name) = validation::validate_currency_to(currency)?;
    Currency::new(short_name, name)
}

/// Maps a country code and its currency to the transport link shape.
///
/// # Errors
///
/// `Storage` if the stored link no longer passes validation.
pub fn link_to_transport(
    country_code: &str,
    currency: &Currency,
) -> Result<CountryWithCurrencyTo, CurrencyError> {
    validation::validate_country_code(country_code)
        .map_err(|err| corrupt("country link", &err))?;
    Ok(CountryWithCurrencyTo::new(
        country_code,
        to_transport(currency)?,
    ))
}

fn corrupt(what: &str, err: &CurrencyError) -> CurrencyError {
    CurrencyError::Storage(format!("Stored {what} is invalid: {err}"))
}
