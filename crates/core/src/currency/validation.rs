//! Shape validation for currencies and country links.
//!
//! Every function here is pure. Transport validators accept `Option`s because
//! anything arriving from the API may be absent; internal validators re-check
//! the field contents of values that already exist.

use super::error::CurrencyError;
use super::types::{CountryCurrencyLink, CountryWithCurrencyTo, Currency, CurrencyTo};

/// Required length, in characters, of currency and country codes.
pub const CODE_LENGTH: usize = 3;

/// Currency object is absent.
pub const CURRENCY_MISSING: &str = "Currency must be present";
/// Currency short name is absent.
pub const CURRENCY_SHORT_NAME_MISSING: &str = "Currency short name must be present";
/// Currency name is absent.
pub const CURRENCY_NAME_MISSING: &str = "Currency name must be present";
/// Currency name is empty.
pub const CURRENCY_NAME_EMPTY: &str = "Currency name must not be empty";
/// Currency short name has the wrong length.
pub const CURRENCY_SHORT_NAME_LENGTH: &str = "Currency short name must have 3 characters";
/// Country-with-currency object is absent.
pub const COUNTRY_WITH_CURRENCY_MISSING: &str = "Country with currency must be present";
/// Country short name is absent.
pub const COUNTRY_SHORT_NAME_MISSING: &str = "Country short name must be present";
/// Country short name has the wrong length.
pub const COUNTRY_SHORT_NAME_LENGTH: &str = "Country short name must have 3 characters";

fn require<'a, T: ?Sized>(value: Option<&'a T>, message: &str) -> Result<&'a T, CurrencyError> {
    value.ok_or_else(|| CurrencyError::invalid(message))
}

fn require_code_length(value: &str, message: &str) -> Result<(), CurrencyError> {
    if value.chars().count() == CODE_LENGTH {
        Ok(())
    } else {
        Err(CurrencyError::invalid(message))
    }
}

/// Checks that a currency code has exactly three characters.
pub fn validate_currency_code(code: &str) -> Result<(), CurrencyError> {
    require_code_length(code, CURRENCY_SHORT_NAME_LENGTH)
}

/// Checks that a country code has exactly three characters.
pub fn validate_country_code(code: &str) -> Result<(), CurrencyError> {
    require_code_length(code, COUNTRY_SHORT_NAME_LENGTH)
}

/// Checks that a currency name is not empty.
pub fn validate_currency_name(name: &str) -> Result<(), CurrencyError> {
    if name.is_empty() {
        Err(CurrencyError::invalid(CURRENCY_NAME_EMPTY))
    } else {
        Ok(())
    }
}

/// Re-validates an internal currency.
pub fn validate_currency(currency: &Currency) -> Result<(), CurrencyError> {
    validate_currency_code(currency.code())?;
    validate_currency_name(currency.name())
}

/// Re-validates an internal country link.
pub fn validate_link(link: &CountryCurrencyLink) -> Result<(), CurrencyError> {
    validate_country_code(link.country_code())?;
    validate_currency(link.currency())
}

/// Validates a transport currency and returns its `(short_name, name)`.
pub fn validate_currency_to(currency: Option<&CurrencyTo>) -> Result<(&str, &str), CurrencyError> {
    let currency = require(currency, CURRENCY_MISSING)?;
    let short_name = require(currency.short_name.as_deref(), CURRENCY_SHORT_NAME_MISSING)?;
    let name = require(currency.name.as_deref(), CURRENCY_NAME_MISSING)?;
    validate_currency_code(short_name)?;
    validate_currency_name(name)?;
    Ok((short_name, name))
}

/// Validates a transport link and returns its country code and currency.
pub fn validate_country_with_currency_to(
    link: Option<&CountryWithCurrencyTo>,
) -> Result<(&str, &CurrencyTo), CurrencyError> {
    let link = require(link, COUNTRY_WITH_CURRENCY_MISSING)?;
    let country = require(link.country_short_name.as_deref(), COUNTRY_SHORT_NAME_MISSING)?;
    validate_country_code(country)?;
    let currency = require(link.currency.as_ref(), CURRENCY_MISSING)?;
    validate_currency_to(Some(currency))?;
    Ok((country, currency))
}
