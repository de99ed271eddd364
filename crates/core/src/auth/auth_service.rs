use std::sync::Arc;

use log::{debug, warn};

use super::auth_model::{LoginData, RegisterData};
use super::auth_schema::{validate_login, validate_register};
use super::auth_traits::AuthClientTrait;
use crate::errors::Result;

/// Validates the auth forms before they reach the client.
pub struct AuthService {
    client: Arc<dyn AuthClientTrait>,
}

impl AuthService {
    pub fn new(client: Arc<dyn AuthClientTrait>) -> Self {
        Self { client }
    }

    /// Returns the session token.
    pub async fn login(&self, credentials: LoginData) -> Result<String> {
        validate_login(&credentials)?;
        debug!("Logging in {}", credentials.email);
        self.client.login(credentials).await.inspect_err(|e| {
            warn!("Login failed: {}", e);
        })
    }

    pub async fn register(&self, data: RegisterData) -> Result<()> {
        let payload = validate_register(&data)?;
        debug!("Registering {}", payload.username);
        self.client.register(payload).await.inspect_err(|e| {
            warn!("Registration failed: {}", e);
        })
    }

    pub fn logout(&self) {
        self.client.logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }
}
