//! Shared HTTP client for the trade journal API.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use tradejournal_core::errors::{Error, Result};

use crate::config::ApiConfig;
use crate::token::{InMemoryTokenStore, TokenStore};

/// Error bodies look like `{ "message": "..." }`.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Returns the `message` field of an error body, if it has a non-blank one.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|err| err.message)
        .filter(|message| !message.trim().is_empty())
}

/// HTTP client for the trade journal API.
///
/// Cheap to share behind an `Arc`: the repositories and the auth client all
/// use the same connection pool and token store.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.tokens.get().is_some())
            .finish()
    }
}

impl ApiClient {
    /// Creates a client with an in-memory token store seeded from the config.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let tokens = Arc::new(InMemoryTokenStore::new(config.token.clone()));
        Self::with_token_store(config, tokens)
    }

    pub fn with_token_store(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Default headers. The bearer token is only sent while one is stored.
    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.tokens.get() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.send(Method::GET, path, None::<&()>).await?;
        parse_body(&body)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = self.send(Method::POST, path, Some(payload)).await?;
        parse_body(&body)
    }

    /// POST whose response body is not needed.
    pub(crate) async fn post_ignore_body<B>(&self, path: &str, payload: &B) -> Result<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.send(Method::POST, path, Some(payload)).await?;
        Ok(())
    }

    pub(crate) async fn put<B, T>(&self, path: &str, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = self.send(Method::PUT, path, Some(payload)).await?;
        parse_body(&body)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    /// Sends a request and returns the body of a successful response.
    async fn send<B>(&self, method: Method, path: &str, payload: Option<&B>) -> Result<String>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.url(path);
        debug!("[TradeJournalApi] {} {}", method, url);

        let mut request: RequestBuilder = self
            .client
            .request(method.clone(), &url)
            .headers(self.headers()?);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Request(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Request(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = extract_error_message(&body);
            warn!(
                "[TradeJournalApi] {} {} returned {}: {}",
                method,
                url,
                status,
                message.as_deref().unwrap_or("no message")
            );
            return Err(Error::Api {
                status: Some(status.as_u16()),
                message,
            });
        }

        Ok(body)
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        Error::Serialization(format!(
            "Failed to parse response: {} - {}",
            e,
            body.chars().take(200).collect::<String>()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> ApiClient {
        let mut config = ApiConfig::default().with_base_url("http://localhost:3333/");
        config.token = token.map(str::to_string);
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_client_url_normalization() {
        let client = client(None);
        assert_eq!(client.base_url(), "http://localhost:3333");
        assert_eq!(client.url("/accounts/a1"), "http://localhost:3333/accounts/a1");
    }

    #[test]
    fn test_bearer_header_only_with_token() {
        let anonymous = client(None);
        let headers = anonymous.headers().unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());

        let signed_in = client(Some("jwt-token"));
        let headers = signed_in.headers().unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer jwt-token");

        signed_in.token_store().clear();
        assert!(signed_in.headers().unwrap().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_invalid_token_is_an_error() {
        let client = client(Some("bad\ntoken"));
        assert!(matches!(client.headers(), Err(Error::Unexpected(_))));
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"message":"Saldo inválido","statusCode":400}"#),
            Some("Saldo inválido".to_string())
        );
        assert_eq!(extract_error_message(r#"{"message":"  "}"#), None);
        assert_eq!(extract_error_message(r#"{"error":"Bad Request"}"#), None);
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(""), None);
    }
}
