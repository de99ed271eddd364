//! Trade journal domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Identifiable;
use crate::{errors::ValidationError, Error, Result};

/// One recorded trade, as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Journal {
    pub id: String,
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    pub asset: String,
    pub entry_price: Decimal,
    pub stop_price: Decimal,
    #[serde(default)]
    pub take_prices: Vec<Decimal>,
    pub investment: Decimal,
    pub lots: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_reward_ratio: Option<Decimal>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub status: String,
    pub direction: String,
    pub trade_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Journal {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Journal {
    /// Returns a copy with the fields set in `update` applied.
    pub fn apply_update(&self, update: &JournalUpdate) -> Journal {
        let mut journal = self.clone();
        if let Some(account_id) = &update.account_id {
            journal.account_id = account_id.clone();
        }
        if let Some(strategy_id) = &update.strategy_id {
            journal.strategy_id = Some(strategy_id.clone());
        }
        if let Some(asset) = &update.asset {
            journal.asset = asset.clone();
        }
        if let Some(entry_price) = update.entry_price {
            journal.entry_price = entry_price;
        }
        if let Some(stop_price) = update.stop_price {
            journal.stop_price = stop_price;
        }
        if let Some(take_prices) = &update.take_prices {
            journal.take_prices = take_prices.clone();
        }
        if let Some(investment) = update.investment {
            journal.investment = investment;
        }
        if let Some(lots) = update.lots {
            journal.lots = lots;
        }
        if let Some(result) = update.result {
            journal.result = Some(result);
        }
        if let Some(ratio) = update.risk_reward_ratio {
            journal.risk_reward_ratio = Some(ratio);
        }
        if let Some(image_urls) = &update.image_urls {
            journal.image_urls = image_urls.clone();
        }
        if let Some(status) = &update.status {
            journal.status = status.clone();
        }
        if let Some(direction) = &update.direction {
            journal.direction = direction.clone();
        }
        if let Some(trade_date) = &update.trade_date {
            journal.trade_date = trade_date.clone();
        }
        if let Some(notes) = &update.notes {
            journal.notes = Some(notes.clone());
        }
        journal
    }
}

/// Payload for recording a new trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewJournal {
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    pub asset: String,
    pub entry_price: Decimal,
    pub stop_price: Decimal,
    #[serde(default)]
    pub take_prices: Vec<Decimal>,
    pub investment: Decimal,
    pub lots: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_reward_ratio: Option<Decimal>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub status: String,
    pub direction: String,
    pub trade_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewJournal {
    /// Validates the new journal data.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "account_id".to_string(),
            )));
        }
        if self.asset.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "asset".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update of a journal entry. Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct JournalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_prices: Option<Vec<Decimal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lots: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reward_ratio: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl JournalUpdate {
    /// Prices are the server's concern; only a blanked asset is rejected.
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.asset, Some(asset) if asset.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Asset cannot be empty".to_string(),
            )));
        }
        if matches!(&self.account_id, Some(id) if id.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
