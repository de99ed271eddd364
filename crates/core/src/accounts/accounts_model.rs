//! Account domain models.

use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{Currency, Market, Platform};
use crate::store::Identifiable;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a trading account as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    /// Known markets only. Tokens outside [`Market::ALL`] are dropped with a
    /// warning so a single legacy record does not fail the whole list.
    #[serde(deserialize_with = "deserialize_known_markets")]
    pub market: Vec<Market>,
    pub currency: Currency,
    pub platform: Platform,
    pub is_prop_firm: bool,
    pub broker: String,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    /// Balance including open positions, computed server side
    #[serde(default)]
    pub floating_balance: Decimal,
    pub credits: Option<Decimal>,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn deserialize_known_markets<'de, D>(deserializer: D) -> std::result::Result<Vec<Market>, D::Error>
where
    D: Deserializer<'de>,
{
    let tokens = Vec::<String>::deserialize(deserializer)?;
    Ok(tokens
        .into_iter()
        .filter_map(|token| match token.parse::<Market>() {
            Ok(market) => Some(market),
            Err(e) => {
                warn!("Ignoring account market: {}", e);
                None
            }
        })
        .collect())
}

impl Identifiable for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Account {
    /// Returns a copy with the fields set in `update` applied.
    ///
    /// Used to show an edit in the cache before the server confirms it.
    pub fn apply_update(&self, update: &AccountUpdate) -> Account {
        let mut account = self.clone();
        if let Some(market) = &update.market {
            account.market = market.clone();
        }
        if let Some(currency) = update.currency {
            account.currency = currency;
        }
        if let Some(platform) = update.platform {
            account.platform = platform;
        }
        if let Some(is_prop_firm) = update.is_prop_firm {
            account.is_prop_firm = is_prop_firm;
        }
        if let Some(broker) = &update.broker {
            account.broker = broker.clone();
        }
        if let Some(initial_balance) = update.initial_balance {
            account.initial_balance = initial_balance;
        }
        if let Some(current_balance) = update.current_balance {
            account.current_balance = current_balance;
        }
        if let Some(credits) = update.credits {
            account.credits = Some(credits);
        }
        if let Some(disabled) = update.disabled {
            account.disabled = disabled;
        }
        account
    }
}

/// Payload for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub market: Vec<Market>,
    pub currency: Currency,
    pub platform: Platform,
    pub is_prop_firm: bool,
    pub broker: String,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    pub credits: Decimal,
    pub disabled: bool,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.broker.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Broker name cannot be empty".to_string(),
            )));
        }
        if self.initial_balance <= Decimal::ZERO || self.current_balance <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Balances must be greater than zero".to_string(),
            )));
        }
        if self.credits < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Credits cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update of an existing account. Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<Vec<Market>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_prop_firm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl AccountUpdate {
    /// Validates the account update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(broker) = &self.broker {
            if broker.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Broker name cannot be empty".to_string(),
                )));
            }
        }
        for balance in [self.initial_balance, self.current_balance]
            .into_iter()
            .flatten()
        {
            if balance <= Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Balances must be greater than zero".to_string(),
                )));
            }
        }
        if let Some(credits) = self.credits {
            if credits < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Credits cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}
