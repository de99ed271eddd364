//! Validation schema for the create-account form.
//!
//! The schema works on the raw values a form submits (codes as strings,
//! amounts already converted to decimals) and reports every failing rule
//! at once, keyed by field path.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accounts_model::NewAccount;
use crate::catalog::{is_other_broker, Currency, Market, Platform};
use crate::errors::FieldErrors;

/// Field paths used in [`FieldErrors`].
pub mod fields {
    pub const MARKET: &str = "market";
    pub const CURRENCY: &str = "currency";
    pub const PLATFORM: &str = "platform";
    pub const BROKER: &str = "broker";
    pub const BROKER_CUSTOM: &str = "brokerCustom";
    pub const INITIAL_BALANCE: &str = "initialBalance";
    pub const CURRENT_BALANCE: &str = "currentBalance";
    pub const CREDITS: &str = "credits";
}

const MIN_BROKER_LEN: usize = 2;

/// Values of the create-account form as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFormValues {
    pub market: Vec<String>,
    pub currency: Option<String>,
    pub platform: Option<String>,
    pub is_prop_firm: bool,
    pub broker: String,
    pub broker_custom: Option<String>,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    pub credits: Option<Decimal>,
    pub disabled: Option<bool>,
}

impl Default for AccountFormValues {
    fn default() -> Self {
        Self {
            market: Vec::new(),
            currency: None,
            platform: None,
            is_prop_firm: false,
            broker: String::new(),
            broker_custom: Some(String::new()),
            initial_balance: Decimal::ZERO,
            current_balance: Decimal::ZERO,
            credits: Some(Decimal::ZERO),
            disabled: Some(false),
        }
    }
}

/// Form values that passed the schema, with codes parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedAccount {
    pub market: Vec<Market>,
    pub currency: Currency,
    pub platform: Platform,
    pub is_prop_firm: bool,
    pub broker: String,
    pub broker_custom: Option<String>,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    pub credits: Option<Decimal>,
    pub disabled: Option<bool>,
}

impl ValidatedAccount {
    /// Normalizes into the create payload: the custom name replaces the
    /// "Other" sentinel, credits default to zero, disabled to false.
    pub fn into_new_account(self) -> NewAccount {
        let broker = if is_other_broker(&self.broker) {
            self.broker_custom
                .map(|name| name.trim().to_string())
                .unwrap_or_default()
        } else {
            self.broker
        };

        NewAccount {
            market: self.market,
            currency: self.currency,
            platform: self.platform,
            is_prop_firm: self.is_prop_firm,
            broker,
            initial_balance: self.initial_balance,
            current_balance: self.current_balance,
            credits: self.credits.unwrap_or(Decimal::ZERO),
            disabled: self.disabled.unwrap_or(false),
        }
    }
}

/// Runs every rule of the create-account schema.
///
/// An empty market selection is accepted.
pub fn validate_create_account(
    values: &AccountFormValues,
) -> std::result::Result<ValidatedAccount, FieldErrors> {
    let mut errors = FieldErrors::new();

    let mut market = Vec::with_capacity(values.market.len());
    for (index, code) in values.market.iter().enumerate() {
        match code.parse::<Market>() {
            Ok(parsed) => {
                if !market.contains(&parsed) {
                    market.push(parsed);
                }
            }
            Err(_) => errors.add(
                format!("{}.{}", fields::MARKET, index),
                format!(
                    "Invalid market '{}'. Expected EXCHANGE, CRYPTO or FOREX",
                    code
                ),
            ),
        }
    }

    let currency = parse_required::<Currency>(
        &mut errors,
        fields::CURRENCY,
        values.currency.as_deref(),
        "currency",
    );
    let platform = parse_required::<Platform>(
        &mut errors,
        fields::PLATFORM,
        values.platform.as_deref(),
        "platform",
    );

    if values.broker.chars().count() < MIN_BROKER_LEN {
        errors.add(
            fields::BROKER,
            "Broker name must be at least 2 characters long",
        );
    }

    if values.initial_balance <= Decimal::ZERO {
        errors.add(
            fields::INITIAL_BALANCE,
            "Initial balance must be greater than zero",
        );
    }
    if values.current_balance <= Decimal::ZERO {
        errors.add(
            fields::CURRENT_BALANCE,
            "Current balance must be greater than zero",
        );
    }
    if matches!(values.credits, Some(credits) if credits < Decimal::ZERO) {
        errors.add(fields::CREDITS, "Credit must be equal or greater than zero");
    }

    let custom_missing = values
        .broker_custom
        .as_deref()
        .map_or(true, |name| name.trim().is_empty());
    if is_other_broker(&values.broker) && custom_missing {
        errors.add(fields::BROKER_CUSTOM, "Enter the broker name");
    }

    match (currency, platform) {
        (Some(currency), Some(platform)) if errors.is_empty() => Ok(ValidatedAccount {
            market,
            currency,
            platform,
            is_prop_firm: values.is_prop_firm,
            broker: values.broker.clone(),
            broker_custom: values.broker_custom.clone(),
            initial_balance: values.initial_balance,
            current_balance: values.current_balance,
            credits: values.credits,
            disabled: values.disabled,
        }),
        _ => Err(errors),
    }
}

fn parse_required<T: std::str::FromStr>(
    errors: &mut FieldErrors,
    path: &str,
    code: Option<&str>,
    what: &str,
) -> Option<T> {
    match code {
        None | Some("") => {
            errors.add(path, "Required");
            None
        }
        Some(code) => match code.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.add(path, format!("Invalid {} '{}'", what, code));
                None
            }
        },
    }
}
