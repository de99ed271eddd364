use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use tradejournal_core::accounts::{Account, AccountRepositoryTrait, AccountUpdate, NewAccount};
use tradejournal_core::errors::Result;

use crate::client::ApiClient;

const ACCOUNTS_PATH: &str = "/accounts";

/// Remote account collection at `/accounts`.
pub struct AccountRepository {
    client: Arc<ApiClient>,
}

impl AccountRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn list(&self) -> Result<Vec<Account>> {
        let accounts: Vec<Account> = self.client.get(ACCOUNTS_PATH).await?;
        info!("[TradeJournalApi] Fetched {} accounts", accounts.len());
        Ok(accounts)
    }

    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        self.client.post(ACCOUNTS_PATH, &new_account).await
    }

    async fn update(&self, account_id: &str, account_update: AccountUpdate) -> Result<Account> {
        self.client
            .put(&format!("{}/{}", ACCOUNTS_PATH, account_id), &account_update)
            .await
    }

    async fn delete(&self, account_id: &str) -> Result<()> {
        self.client
            .delete(&format!("{}/{}", ACCOUNTS_PATH, account_id))
            .await
    }
}
