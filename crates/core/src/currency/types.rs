//! Currency domain and transport types.

use serde::{Deserialize, Serialize};

use super::error::CurrencyError;
use super::validation;

// ============================================================================
// Internal shapes
// ============================================================================

/// A registered currency.
///
/// Value equality covers both `code` and `name` exactly. Identity for
/// business rules is the code compared case-insensitively, see
/// [`Currency::has_code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency {
    code: String,
    name: String,
}

impl Currency {
    /// Creates a validated currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the code is not exactly three characters
    /// or the name is empty.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Result<Self, CurrencyError> {
        let currency = Self {
            code: code.into(),
            name: name.into(),
        };
        validation::validate_currency(&currency)?;
        Ok(currency)
    }

    /// Builds a currency without checking it, to simulate corrupted storage.
    #[cfg(test)]
    pub(crate) fn unchecked(code: &str, name: &str) -> Self {
        Self {
            code: code.to_owned(),
            name: name.to_owned(),
        }
    }

    /// Three-character short code, stored as given.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this currency is identified by `code`, ignoring case.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        eq_ignore_case(&self.code, code)
    }

    /// Whether this currency carries `name`, ignoring case.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }
}

/// Assignment of a country to its currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCurrencyLink {
    country_code: String,
    currency: Currency,
}

impl CountryCurrencyLink {
    /// Creates a validated link.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the country code or the currency is invalid.
    pub fn new(country_code: impl Into<String>, currency: Currency) -> Result<Self, CurrencyError> {
        let link = Self {
            country_code: country_code.into(),
            currency,
        };
        validation::validate_link(&link)?;
        Ok(link)
    }

    /// Three-character country code.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The currency used in that country.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Splits the link into its country code and currency.
    #[must_use]
    pub fn into_parts(self) -> (String, Currency) {
        (self.country_code, self.currency)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

// ============================================================================
// Transport shapes
// ============================================================================

/// Currency as exchanged over the API: `{ "shortName", "name" }`.
///
/// Fields are optional so that missing values are reported by validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyTo {
    /// Three-character short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CurrencyTo {
    /// Creates a fully populated transport currency.
    #[must_use]
    pub fn new(short_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            short_name: Some(short_name.into()),
            name: Some(name.into()),
        }
    }
}

/// Country with its currency as exchanged over the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryWithCurrencyTo {
    /// Three-character country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_short_name: Option<String>,
    /// The currency used in that country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyTo>,
}

impl CountryWithCurrencyTo {
    /// Creates a fully populated transport link.
    #[must_use]
    pub fn new(country_short_name: impl Into<String>, currency: CurrencyTo) -> Self {
        Self {
            country_short_name: Some(country_short_name.into()),
            currency: Some(currency),
        }
    }
}
