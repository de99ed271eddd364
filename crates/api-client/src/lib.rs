//! HTTP client for the trade journal API.
//!
//! Implements the repository and auth traits of `tradejournal-core` on top
//! of `reqwest`. Every request carries the session token as a bearer token
//! once one is stored.

mod accounts;
mod auth;
mod client;
mod config;
mod journals;
mod strategies;
mod token;

pub use accounts::AccountRepository;
pub use client::{extract_error_message, ApiClient};
pub use config::{ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use journals::JournalRepository;
pub use strategies::StrategyRepository;
pub use token::{InMemoryTokenStore, TokenStore};
