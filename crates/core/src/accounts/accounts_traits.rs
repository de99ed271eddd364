//! Account repository and service traits.
//!
//! The repository is the remote collection (the HTTP API in production);
//! the service adds validation, caching and notifications on top of it.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::errors::Result;

/// Trait defining the contract for the remote account collection.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Account>>;

    /// Creates an account and returns the stored record.
    async fn create(&self, new_account: NewAccount) -> Result<Account>;

    async fn update(&self, account_id: &str, account_update: AccountUpdate) -> Result<Account>;

    async fn delete(&self, account_id: &str) -> Result<()>;
}

/// Trait defining the contract for Account service operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Fetches the accounts from the remote collection and caches them.
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Cached accounts, empty until the first load.
    fn accounts(&self) -> Vec<Account>;

    /// Retrieves a cached account by ID.
    fn get_account(&self, account_id: &str) -> Result<Account>;

    async fn create_account(&self, new_account: NewAccount) -> Result<Account>;

    async fn update_account(&self, account_id: &str, account_update: AccountUpdate)
        -> Result<Account>;

    async fn delete_account(&self, account_id: &str) -> Result<()>;
}
