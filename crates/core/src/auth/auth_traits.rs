use async_trait::async_trait;

use super::auth_model::{LoginData, RegisterPayload};
use crate::errors::Result;

/// Remote authentication endpoints plus the session token they produce.
#[async_trait]
pub trait AuthClientTrait: Send + Sync {
    /// Logs in and keeps the returned token for later requests.
    async fn login(&self, credentials: LoginData) -> Result<String>;

    async fn register(&self, payload: RegisterPayload) -> Result<()>;

    /// Forgets the session token.
    fn logout(&self);

    fn is_authenticated(&self) -> bool;
}
