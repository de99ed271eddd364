//! Core error types for the trade journal client.
//!
//! This module defines transport-agnostic error types. HTTP-specific errors
//! (from reqwest, status codes, response bodies) are converted to these types
//! by the API client crate.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the trade journal client.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The remote API answered with a non-success status.
    #[error("API error{}: {}", status.map(|s| format!(" {}", s)).unwrap_or_default(), message.as_deref().unwrap_or("request failed"))]
    Api {
        status: Option<u16>,
        message: Option<String>,
    },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to (de)serialize payload: {0}")]
    Serialization(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// The message the server attached to a failed request, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Returns the per-field errors when this is a schema failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Error::Validation(ValidationError::Fields(errors)) => Some(errors),
            _ => None,
        }
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("{0}")]
    Fields(FieldErrors),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Field path to human readable messages, as produced by a schema.
///
/// Paths are the camelCase names used by the API payloads
/// (`initialBalance`, `brokerCustom`, `market.0`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(path.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.errors.contains_key(path)
    }

    /// Messages attached to a field, empty when the field is valid.
    pub fn get(&self, path: &str) -> &[String] {
        self.errors.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message for a field, which is what an inline hint shows.
    pub fn first(&self, path: &str) -> Option<&str> {
        self.get(path).first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(path, messages)| (path.as_str(), messages.as_slice()))
    }

    /// Ok when empty, otherwise the collected errors.
    pub fn into_result(self) -> std::result::Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, messages) in &self.errors {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", path, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Error::Validation(ValidationError::Fields(errors))
    }
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_collects_messages_per_path() {
        let mut errors = FieldErrors::new();
        errors.add("broker", "too short");
        errors.add("broker", "unknown");
        errors.add("initialBalance", "must be positive");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("broker").len(), 2);
        assert_eq!(errors.first("initialBalance"), Some("must be positive"));
        assert!(errors.get("credits").is_empty());
        assert_eq!(
            errors.to_string(),
            "broker: too short; broker: unknown; initialBalance: must be positive"
        );
    }

    #[test]
    fn test_server_message_only_for_api_errors_with_text() {
        let err = Error::Api {
            status: Some(422),
            message: Some("Broker already registered".to_string()),
        };
        assert_eq!(err.server_message(), Some("Broker already registered"));
        assert_eq!(err.to_string(), "API error 422: Broker already registered");

        let blank = Error::Api {
            status: Some(500),
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.server_message(), None);

        let transport = Error::Request("connection refused".to_string());
        assert_eq!(transport.server_message(), None);
    }

    #[test]
    fn test_field_errors_convert_into_root_error() {
        let mut errors = FieldErrors::new();
        errors.add("currency", "Required");
        let err: Error = errors.clone().into();
        assert_eq!(err.field_errors(), Some(&errors));
    }
}
