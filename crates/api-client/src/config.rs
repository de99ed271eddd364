//! API client configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TRADEJOURNAL_API_BASE_URL` | `http://localhost:3333` |
//! | `TRADEJOURNAL_API_TIMEOUT_MS` | `30000` |
//! | `TRADEJOURNAL_TOKEN` | none |

use std::env;
use std::time::Duration;

use log::warn;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const BASE_URL_VAR: &str = "TRADEJOURNAL_API_BASE_URL";
const TIMEOUT_VAR: &str = "TRADEJOURNAL_API_TIMEOUT_MS";
const TOKEN_VAR: &str = "TRADEJOURNAL_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Session token to start with, e.g. from a previous login.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            token: None,
        }
    }
}

impl ApiConfig {
    /// Reads the configuration after loading a `.env` file if there is one.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Invalid values fall
    /// back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = match lookup(BASE_URL_VAR) {
            Some(raw) => match normalize_base_url(&raw) {
                Some(url) => url,
                None => {
                    warn!("Ignoring invalid {}: {:?}", BASE_URL_VAR, raw);
                    defaults.base_url
                }
            },
            None => defaults.base_url,
        };

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    warn!("Ignoring invalid {}: {:?}", TIMEOUT_VAR, raw);
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        let token = lookup(TOKEN_VAR)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        Self {
            base_url,
            timeout,
            token,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        match normalize_base_url(base_url) {
            Some(url) => self.base_url = url,
            None => warn!("Ignoring invalid base URL: {:?}", base_url),
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Validates an http(s) URL and strips the trailing slash.
fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    Some(trimmed.trim_end_matches('/').to_string())
}
