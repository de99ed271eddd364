use async_trait::async_trait;
use log::info;

use tradejournal_core::auth::{AuthClientTrait, LoginData, LoginResponse, RegisterPayload};
use tradejournal_core::errors::Result;

use crate::client::ApiClient;

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";

#[async_trait]
impl AuthClientTrait for ApiClient {
    async fn login(&self, credentials: LoginData) -> Result<String> {
        let response: LoginResponse = self.post(LOGIN_PATH, &credentials).await?;
        self.token_store().set(response.token.clone());
        info!("[TradeJournalApi] Logged in as {}", credentials.email);
        Ok(response.token)
    }

    async fn register(&self, payload: RegisterPayload) -> Result<()> {
        self.post_ignore_body(REGISTER_PATH, &payload).await?;
        info!("[TradeJournalApi] Registered {}", payload.username);
        Ok(())
    }

    fn logout(&self) {
        self.token_store().clear();
    }

    fn is_authenticated(&self) -> bool {
        self.token_store().get().is_some()
    }
}
