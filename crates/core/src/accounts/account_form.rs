//! State of the create-account form.
//!
//! Amount inputs are tracked twice: the formatted text the user sees and the
//! decimal that gets submitted. The text follows the selected currency; the
//! decimal does not change when the currency does.

use log::debug;
use rust_decimal::Decimal;

use super::accounts_model::NewAccount;
use super::accounts_schema::{fields, validate_create_account, AccountFormValues, ValidatedAccount};
use crate::catalog::{find_broker, is_other_broker, Currency, Market, Platform};
use crate::errors::FieldErrors;
use crate::utils::{format_currency, parse_minor_units, strip_non_digits};

/// The three amount inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountField {
    InitialBalance,
    CurrentBalance,
    Credits,
}

impl AmountField {
    pub const ALL: [AmountField; 3] = [
        AmountField::InitialBalance,
        AmountField::CurrentBalance,
        AmountField::Credits,
    ];

    /// Field path used for validation messages.
    pub fn path(&self) -> &'static str {
        match self {
            AmountField::InitialBalance => fields::INITIAL_BALANCE,
            AmountField::CurrentBalance => fields::CURRENT_BALANCE,
            AmountField::Credits => fields::CREDITS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct AmountDisplays {
    initial_balance: String,
    current_balance: String,
    credits: String,
}

impl AmountDisplays {
    fn get(&self, field: AmountField) -> &str {
        match field {
            AmountField::InitialBalance => &self.initial_balance,
            AmountField::CurrentBalance => &self.current_balance,
            AmountField::Credits => &self.credits,
        }
    }

    fn get_mut(&mut self, field: AmountField) -> &mut String {
        match field {
            AmountField::InitialBalance => &mut self.initial_balance,
            AmountField::CurrentBalance => &mut self.current_balance,
            AmountField::Credits => &mut self.credits,
        }
    }
}

/// Draft of a new account while the create dialog is open.
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    values: AccountFormValues,
    displays: AmountDisplays,
    errors: FieldErrors,
}

impl AccountForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &AccountFormValues {
        &self.values
    }

    /// Selected currency, `None` until a supported code is chosen.
    pub fn currency(&self) -> Option<Currency> {
        self.values
            .currency
            .as_deref()
            .and_then(|code| code.parse().ok())
    }

    /// Selects a currency and re-renders every non-empty amount under it.
    ///
    /// Only the text changes: the submitted decimals are not converted.
    pub fn set_currency(&mut self, code: &str) {
        self.values.currency = Some(code.to_string());
        let currency = self.currency();
        for field in AmountField::ALL {
            let display = self.displays.get_mut(field);
            if !display.is_empty() {
                *display = format_currency(&strip_non_digits(display), currency);
            }
        }
    }

    /// Handles a keystroke in an amount input.
    pub fn input_amount(&mut self, field: AmountField, text: &str) {
        let formatted = format_currency(text, self.currency());
        let value = parse_minor_units(&formatted);
        debug!("amount input {}: {:?} -> {}", field.path(), text, value);

        *self.displays.get_mut(field) = formatted;
        match field {
            AmountField::InitialBalance => self.values.initial_balance = value,
            AmountField::CurrentBalance => self.values.current_balance = value,
            AmountField::Credits => self.values.credits = Some(value),
        }
    }

    /// Text currently shown in an amount input.
    pub fn display(&self, field: AmountField) -> &str {
        self.displays.get(field)
    }

    /// Decimal that will be submitted for an amount input.
    pub fn amount(&self, field: AmountField) -> Decimal {
        match field {
            AmountField::InitialBalance => self.values.initial_balance,
            AmountField::CurrentBalance => self.values.current_balance,
            AmountField::Credits => self.values.credits.unwrap_or(Decimal::ZERO),
        }
    }

    pub fn is_market_selected(&self, market: Market) -> bool {
        self.values.market.iter().any(|code| code == market.as_str())
    }

    /// Checks or unchecks a market.
    pub fn toggle_market(&mut self, market: Market) {
        if self.is_market_selected(market) {
            self.values.market.retain(|code| code != market.as_str());
        } else {
            self.values.market.push(market.as_str().to_string());
        }
    }

    pub fn set_platform(&mut self, code: &str) {
        self.values.platform = Some(code.to_string());
    }

    pub fn platform(&self) -> Option<Platform> {
        self.values
            .platform
            .as_deref()
            .and_then(|code| code.parse().ok())
    }

    /// Selects a broker. A catalog broker decides the prop-firm flag.
    pub fn set_broker(&mut self, name: &str) {
        self.values.broker = name.to_string();
        if let Some(option) = find_broker(name) {
            self.values.is_prop_firm = option.is_prop_firm;
        }
    }

    /// Whether the custom broker name and prop-firm inputs are shown.
    pub fn is_other_broker(&self) -> bool {
        is_other_broker(&self.values.broker)
    }

    pub fn set_broker_custom(&mut self, name: &str) {
        self.values.broker_custom = Some(name.to_string());
    }

    /// Sets the prop-firm flag from the yes/no control.
    ///
    /// The control only exists for the "Other" broker; for catalog brokers
    /// the flag is derived and the call is ignored. Returns whether the value
    /// was applied.
    pub fn set_prop_firm(&mut self, is_prop_firm: bool) -> bool {
        if !self.is_other_broker() {
            return false;
        }
        self.values.is_prop_firm = is_prop_firm;
        true
    }

    pub fn is_prop_firm(&self) -> bool {
        self.values.is_prop_firm
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.values.disabled = Some(disabled);
    }

    /// Errors from the last validation, for inline display.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, path: &str) -> Option<&str> {
        self.errors.first(path)
    }

    /// Runs the schema and keeps its errors on the form.
    pub fn validate(&mut self) -> std::result::Result<ValidatedAccount, FieldErrors> {
        match validate_create_account(&self.values) {
            Ok(validated) => {
                self.errors = FieldErrors::new();
                Ok(validated)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Validates and builds the create payload.
    pub fn to_payload(&mut self) -> std::result::Result<NewAccount, FieldErrors> {
        let mut payload = self.validate()?.into_new_account();
        if self.displays.credits.is_empty() {
            payload.credits = Decimal::ZERO;
        }
        Ok(payload)
    }

    /// Back to the initial empty draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
