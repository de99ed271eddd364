//! Strategy domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Identifiable;
use crate::{errors::ValidationError, Error, Result};

/// A named trading setup that journal entries can refer to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Strategy {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Strategy {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Strategy {
    pub fn is_default(&self) -> bool {
        self.is_default.unwrap_or(false)
    }

    /// Returns a copy with the fields set in `update` applied.
    pub fn apply_update(&self, update: &StrategyUpdate) -> Strategy {
        let mut strategy = self.clone();
        if let Some(name) = &update.name {
            strategy.name = name.clone();
        }
        if let Some(description) = &update.description {
            strategy.description = Some(description.clone());
        }
        if let Some(is_default) = update.is_default {
            strategy.is_default = Some(is_default);
        }
        if let Some(image_urls) = &update.image_urls {
            strategy.image_urls = image_urls.clone();
        }
        strategy
    }
}

/// Payload for creating a strategy. The owner is taken from the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NewStrategy {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl NewStrategy {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        Ok(())
    }
}

/// Partial update of a strategy. Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StrategyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

impl StrategyUpdate {
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Strategy name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
