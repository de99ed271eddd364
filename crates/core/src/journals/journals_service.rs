use log::debug;
use std::sync::Arc;

use super::journals_model::{Journal, JournalUpdate, NewJournal};
use super::journals_traits::{JournalRepositoryTrait, JournalServiceTrait};
use crate::constants::JOURNALS_QUERY_KEY;
use crate::errors::{Error, Result};
use crate::notifications::NotificationSink;
use crate::store::{CollectionStore, StoreMessages};

const JOURNAL_MESSAGES: StoreMessages = StoreMessages {
    created: "Journal created successfully!",
    updated: "Journal updated!",
    deleted: "Journal deleted!",
    create_failed: Some("Error creating journal"),
    update_failed: Some("Error updating journal"),
    delete_failed: Some("Error deleting journal"),
};

/// Service for managing trade journal entries
pub struct JournalService {
    repository: Arc<dyn JournalRepositoryTrait>,
    store: CollectionStore<Journal>,
}

impl JournalService {
    pub fn new(
        repository: Arc<dyn JournalRepositoryTrait>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            repository,
            store: CollectionStore::new(JOURNALS_QUERY_KEY, notifier, JOURNAL_MESSAGES),
        }
    }
}

#[async_trait::async_trait]
impl JournalServiceTrait for JournalService {
    async fn list_journals(&self) -> Result<Vec<Journal>> {
        self.store.load(self.repository.list()).await
    }

    fn journals(&self) -> Vec<Journal> {
        self.store.cache().snapshot()
    }

    fn get_journal(&self, journal_id: &str) -> Result<Journal> {
        self.store
            .cache()
            .get(journal_id)
            .ok_or_else(|| Error::NotFound(format!("Journal {}", journal_id)))
    }

    fn journals_for_account(&self, account_id: &str) -> Vec<Journal> {
        self.journals()
            .into_iter()
            .filter(|journal| journal.account_id == account_id)
            .collect()
    }

    async fn create_journal(&self, new_journal: NewJournal) -> Result<Journal> {
        new_journal.validate()?;
        debug!(
            "Creating journal..., account: {}, asset: {}",
            new_journal.account_id, new_journal.asset
        );
        self.store
            .create(self.repository.create(new_journal))
            .await
    }

    async fn update_journal(
        &self,
        journal_id: &str,
        journal_update: JournalUpdate,
    ) -> Result<Journal> {
        journal_update.validate()?;
        let optimistic = self
            .store
            .cache()
            .get(journal_id)
            .map(|journal| journal.apply_update(&journal_update));
        self.store
            .update(
                journal_id,
                optimistic,
                self.repository.update(journal_id, journal_update),
            )
            .await
    }

    async fn delete_journal(&self, journal_id: &str) -> Result<()> {
        self.store
            .delete(journal_id, self.repository.delete(journal_id))
            .await
    }
}
