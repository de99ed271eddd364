//! Trade Journal Core - Domain entities, forms, stores, and traits.
//!
//! This crate contains the client-side logic of the trade journal
//! dashboard. It is transport-agnostic: remote collections are reached
//! through repository traits implemented by the `tradejournal-api` crate.

pub mod accounts;
pub mod auth;
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod journals;
pub mod notifications;
pub mod store;
pub mod strategies;
pub mod ui;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
