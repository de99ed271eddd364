use log::debug;
use std::sync::Arc;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::constants::ACCOUNTS_QUERY_KEY;
use crate::errors::{Error, Result};
use crate::notifications::NotificationSink;
use crate::store::{CollectionStore, StoreMessages};

const ACCOUNT_MESSAGES: StoreMessages = StoreMessages {
    created: "Account created successfully!",
    updated: "Account updated successfully!",
    deleted: "Account deleted successfully!",
    create_failed: Some("Error creating account"),
    update_failed: Some("Error updating account"),
    delete_failed: Some("Error deleting account"),
};

/// Service for managing accounts
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    store: CollectionStore<Account>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(
        repository: Arc<dyn AccountRepositoryTrait>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            repository,
            store: CollectionStore::new(ACCOUNTS_QUERY_KEY, notifier, ACCOUNT_MESSAGES),
        }
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.store.load(self.repository.list()).await
    }

    fn accounts(&self) -> Vec<Account> {
        self.store.cache().snapshot()
    }

    fn get_account(&self, account_id: &str) -> Result<Account> {
        self.store
            .cache()
            .get(account_id)
            .ok_or_else(|| Error::NotFound(format!("Account {}", account_id)))
    }

    async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        debug!(
            "Creating account..., broker: {}, currency: {}",
            new_account.broker, new_account.currency
        );
        self.store
            .create(self.repository.create(new_account))
            .await
    }

    async fn update_account(
        &self,
        account_id: &str,
        account_update: AccountUpdate,
    ) -> Result<Account> {
        account_update.validate()?;
        let optimistic = self
            .store
            .cache()
            .get(account_id)
            .map(|account| account.apply_update(&account_update));
        self.store
            .update(
                account_id,
                optimistic,
                self.repository.update(account_id, account_update),
            )
            .await
    }

    async fn delete_account(&self, account_id: &str) -> Result<()> {
        self.store
            .delete(account_id, self.repository.delete(account_id))
            .await
    }
}
