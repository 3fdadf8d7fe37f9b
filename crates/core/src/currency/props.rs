//! Property-based tests for the catalog invariants.

use std::sync::Arc;

use proptest::prelude::*;
use tokio::runtime::Runtime;

use super::error::CurrencyError;
use super::manager::CurrencyManager;
use super::repository::InMemoryCurrencyRepository;
use super::types::Currency;

/// Strategy to generate three-letter upper-case codes.
fn code() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

/// Strategy to generate non-empty display names.
fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,15}"
}

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("test runtime")
}

fn seeded() -> CurrencyManager {
    CurrencyManager::new(Arc::new(InMemoryCurrencyRepository::with_seed_data().unwrap()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A second currency under the same code with another name is rejected
    /// and the first definition stays in place.
    #[test]
    fn prop_conflicting_name_is_rejected(
        code in code(),
        first in name(),
        second in name(),
        lower_second in any::<bool>(),
    ) {
        prop_assume!(first.to_lowercase() != second.to_lowercase());
        let manager = CurrencyManager::new(Arc::new(InMemoryCurrencyRepository::new()));
        let second_code = if lower_second { code.to_lowercase() } else { code.clone() };

        runtime().block_on(async {
            let original = Currency::new(code.clone(), first).unwrap();
            manager.add_currency(original.clone()).await.unwrap();

            let err = manager
                .add_currency(Currency::new(second_code, second).unwrap())
                .await
                .unwrap_err();
            prop_assert!(matches!(err, CurrencyError::InvalidArgument(_)));
            prop_assert_eq!(manager.get_currency(&code).await.unwrap(), original);
            Ok::<(), TestCaseError>(())
        })?;
    }

    /// Adding the same currency twice leaves the set unchanged.
    #[test]
    fn prop_add_currency_is_idempotent(code in code(), name in name()) {
        let manager = seeded();
        runtime().block_on(async {
            let currency = Currency::new(code, name).unwrap();
            let first = manager.add_currency(currency.clone()).await;
            let second = manager.add_currency(currency).await;
            match (first, second) {
                (Ok(first), Ok(second)) => prop_assert_eq!(first, second),
                // Collides with a seed code under a different name.
                (Err(_), Err(_)) => {}
                (first, second) => prop_assert!(false, "diverged: {first:?} / {second:?}"),
            }
            Ok::<(), TestCaseError>(())
        })?;
    }

    /// Linking a new country makes both the link and the currency visible.
    #[test]
    fn prop_new_country_link_is_visible(country in code(), code in code(), name in name()) {
        let manager = CurrencyManager::new(Arc::new(InMemoryCurrencyRepository::new()));
        runtime().block_on(async {
            let currency = Currency::new(code, name).unwrap();
            manager
                .add_country_with_currency(&country, currency.clone())
                .await
                .unwrap();

            prop_assert_eq!(
                manager.get_country_with_currency(&country).await.unwrap(),
                currency.clone()
            );
            prop_assert!(manager.get_currencies().await.unwrap().contains(&currency));
            Ok::<(), TestCaseError>(())
        })?;
    }

    /// An existing link is never replaced, but the new currency is still
    /// registered when its code is new.
    #[test]
    fn prop_existing_link_is_kept(code in code(), name in name()) {
        prop_assume!(code != "EUR" && code != "GPD");
        let manager = seeded();
        runtime().block_on(async {
            let currency = Currency::new(code, name).unwrap();
            let links = manager
                .add_country_with_currency("GER", currency.clone())
                .await
                .unwrap();

            prop_assert_eq!(&links["GER"], &Currency::new("EUR", "Euro").unwrap());
            prop_assert!(manager.get_currencies().await.unwrap().contains(&currency));
            Ok::<(), TestCaseError>(())
        })?;
    }

    /// Looking up a code nobody registered fails with `NotFound`.
    #[test]
    fn prop_unknown_code_not_found(code in code()) {
        prop_assume!(code != "EUR" && code != "GPD");
        let manager = seeded();
        runtime().block_on(async {
            let err = manager.get_currency(&code).await.unwrap_err();
            prop_assert!(matches!(err, CurrencyError::NotFound(_)));
            Ok::<(), TestCaseError>(())
        })?;
    }
}
