use async_trait::async_trait;

use super::journals_model::{Journal, JournalUpdate, NewJournal};
use crate::errors::Result;

/// Trait defining the contract for the remote journal collection.
#[async_trait]
pub trait JournalRepositoryTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Journal>>;

    async fn create(&self, new_journal: NewJournal) -> Result<Journal>;

    async fn update(&self, journal_id: &str, journal_update: JournalUpdate) -> Result<Journal>;

    async fn delete(&self, journal_id: &str) -> Result<()>;
}

/// Trait defining the contract for Journal service operations.
#[async_trait]
pub trait JournalServiceTrait: Send + Sync {
    async fn list_journals(&self) -> Result<Vec<Journal>>;

    fn journals(&self) -> Vec<Journal>;

    fn get_journal(&self, journal_id: &str) -> Result<Journal>;

    /// Cached entries recorded on one account, in cache order.
    fn journals_for_account(&self, account_id: &str) -> Vec<Journal>;

    async fn create_journal(&self, new_journal: NewJournal) -> Result<Journal>;

    async fn update_journal(&self, journal_id: &str, journal_update: JournalUpdate)
        -> Result<Journal>;

    async fn delete_journal(&self, journal_id: &str) -> Result<()>;
}
