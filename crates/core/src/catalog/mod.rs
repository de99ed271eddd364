//! Catalog module - fixed enumerations offered by the account forms.

mod brokers;
mod catalog_model;

pub use brokers::{broker_catalog, find_broker, is_other_broker, BrokerOption};
pub use catalog_model::{Currency, Market, Platform};
