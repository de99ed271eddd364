use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use tradejournal_core::errors::Result;
use tradejournal_core::journals::{Journal, JournalRepositoryTrait, JournalUpdate, NewJournal};

use crate::client::ApiClient;

const JOURNALS_PATH: &str = "/journals";

/// Remote journal collection at `/journals`.
pub struct JournalRepository {
    client: Arc<ApiClient>,
}

impl JournalRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JournalRepositoryTrait for JournalRepository {
    async fn list(&self) -> Result<Vec<Journal>> {
        let journals: Vec<Journal> = self.client.get(JOURNALS_PATH).await?;
        info!("[TradeJournalApi] Fetched {} journals", journals.len());
        Ok(journals)
    }

    async fn create(&self, new_journal: NewJournal) -> Result<Journal> {
        self.client.post(JOURNALS_PATH, &new_journal).await
    }

    async fn update(&self, journal_id: &str, journal_update: JournalUpdate) -> Result<Journal> {
        self.client
            .put(&format!("{}/{}", JOURNALS_PATH, journal_id), &journal_update)
            .await
    }

    async fn delete(&self, journal_id: &str) -> Result<()> {
        self.client
            .delete(&format!("{}/{}", JOURNALS_PATH, journal_id))
            .await
    }
}
