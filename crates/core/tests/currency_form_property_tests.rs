//! Property-based integration tests for amount formatting and the
//! create-account schema.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tradejournal_core::accounts::{
    fields, validate_create_account, AccountForm, AccountFormValues, AmountField,
};
use tradejournal_core::catalog::{Currency, Market, Platform};
use tradejournal_core::utils::{format_currency, parse_minor_units, strip_non_digits};

// =============================================================================
// Generators
// =============================================================================

fn arb_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

fn arb_platform() -> impl Strategy<Value = Platform> {
    prop::sample::select(Platform::ALL.to_vec())
}

fn arb_markets() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(Market::ALL.to_vec(), 0..=3)
        .prop_map(|markets| markets.iter().map(|m| m.as_str().to_string()).collect())
}

/// Amounts in cents, from zero to a few billions.
fn arb_cents() -> impl Strategy<Value = i64> {
    0i64..1_000_000_000_000
}

/// Text as it may arrive from an amount input: digits mixed with noise.
fn arb_typed_text() -> impl Strategy<Value = String> {
    "[0-9R$.,\\sA-Z€£]{0,30}"
}

// =============================================================================
// Formatting properties
// =============================================================================

proptest! {
    /// Formatting the digits of a formatted amount gives the same string.
    #[test]
    fn prop_format_is_idempotent(text in arb_typed_text(), currency in arb_currency()) {
        let once = format_currency(&text, Some(currency));
        let twice = format_currency(&strip_non_digits(&once), Some(currency));
        prop_assert_eq!(once, twice);
    }

    /// Input without digits always renders blank.
    #[test]
    fn prop_no_digits_is_blank(text in "[^0-9]{0,20}", currency in arb_currency()) {
        prop_assert_eq!(format_currency(&text, Some(currency)), "");
        prop_assert_eq!(parse_minor_units(&text), Decimal::ZERO);
    }

    /// The displayed amount and the parsed value agree.
    #[test]
    fn prop_display_matches_value(cents in arb_cents(), currency in arb_currency()) {
        let formatted = format_currency(&cents.to_string(), Some(currency));
        prop_assert!(formatted.starts_with(currency.symbol()));
        let suffix = format!(",{:02}", cents % 100);
        prop_assert!(formatted.ends_with(&suffix));
        prop_assert_eq!(parse_minor_units(&formatted), Decimal::new(cents, 2));
    }

    /// Switching currency only changes the text, never the submitted value.
    #[test]
    fn prop_currency_switch_keeps_values(
        cents in arb_cents(),
        from in arb_currency(),
        to in arb_currency(),
    ) {
        let mut form = AccountForm::new();
        form.set_currency(from.as_str());
        form.input_amount(AmountField::CurrentBalance, &cents.to_string());
        let before = form.amount(AmountField::CurrentBalance);

        form.set_currency(to.as_str());
        prop_assert_eq!(form.amount(AmountField::CurrentBalance), before);
        prop_assert_eq!(
            strip_non_digits(form.display(AmountField::CurrentBalance)),
            strip_non_digits(&format_currency(&cents.to_string(), Some(to)))
        );
    }
}

// =============================================================================
// Schema properties
// =============================================================================

proptest! {
    /// A draft with valid codes, a long enough broker and positive balances
    /// always passes.
    #[test]
    fn prop_valid_drafts_pass(
        market in arb_markets(),
        currency in arb_currency(),
        platform in arb_platform(),
        broker in "[A-Za-z][A-Za-z0-9 ]{1,20}",
        initial in 1i64..1_000_000_000,
        current in 1i64..1_000_000_000,
        credits in proptest::option::of(0i64..1_000_000),
    ) {
        prop_assume!(broker != "Other");
        let values = AccountFormValues {
            market,
            currency: Some(currency.as_str().to_string()),
            platform: Some(platform.as_str().to_string()),
            broker: broker.clone(),
            initial_balance: Decimal::new(initial, 2),
            current_balance: Decimal::new(current, 2),
            credits: credits.map(|c| Decimal::new(c, 2)),
            ..Default::default()
        };

        let payload = validate_create_account(&values).unwrap().into_new_account();
        prop_assert_eq!(payload.broker, broker);
        prop_assert!(payload.credits >= Decimal::ZERO);
    }

    /// A non-positive balance is always reported on its own field.
    #[test]
    fn prop_non_positive_balance_rejected(cents in -1_000_000i64..=0) {
        let values = AccountFormValues {
            currency: Some("USD".to_string()),
            platform: Some("MT4".to_string()),
            broker: "FTMO".to_string(),
            initial_balance: Decimal::new(cents, 2),
            current_balance: Decimal::ONE,
            ..Default::default()
        };
        let errors = validate_create_account(&values).unwrap_err();
        prop_assert!(errors.contains(fields::INITIAL_BALANCE));
        prop_assert!(!errors.contains(fields::CURRENT_BALANCE));
    }

    /// "Other" resolves to the trimmed custom name whenever one is given.
    #[test]
    fn prop_other_broker_resolves_custom_name(name in "[A-Za-z]{1,12}", pad in " {0,3}") {
        let values = AccountFormValues {
            currency: Some("BRL".to_string()),
            platform: Some("PROFIT".to_string()),
            broker: "Other".to_string(),
            broker_custom: Some(format!("{}{}{}", pad, name, pad)),
            initial_balance: Decimal::ONE,
            current_balance: Decimal::ONE,
            ..Default::default()
        };
        let payload = validate_create_account(&values).unwrap().into_new_account();
        prop_assert_eq!(payload.broker, name);
    }
}
