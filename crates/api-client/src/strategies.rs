use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use tradejournal_core::errors::Result;
use tradejournal_core::strategies::{
    NewStrategy, Strategy, StrategyRepositoryTrait, StrategyUpdate,
};

use crate::client::ApiClient;

const STRATEGIES_PATH: &str = "/api/strategies";

/// Remote strategy collection at `/api/strategies`.
pub struct StrategyRepository {
    client: Arc<ApiClient>,
}

impl StrategyRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StrategyRepositoryTrait for StrategyRepository {
    async fn list(&self) -> Result<Vec<Strategy>> {
        let strategies: Vec<Strategy> = self.client.get(STRATEGIES_PATH).await?;
        info!("[TradeJournalApi] Fetched {} strategies", strategies.len());
        Ok(strategies)
    }

    async fn create(&self, new_strategy: NewStrategy) -> Result<Strategy> {
        self.client.post(STRATEGIES_PATH, &new_strategy).await
    }

    async fn update(
        &self,
        strategy_id: &str,
        strategy_update: StrategyUpdate,
    ) -> Result<Strategy> {
        self.client
            .put(&format!("{}/{}", STRATEGIES_PATH, strategy_id), &strategy_update)
            .await
    }

    async fn delete(&self, strategy_id: &str) -> Result<()> {
        self.client
            .delete(&format!("{}/{}", STRATEGIES_PATH, strategy_id))
            .await
    }
}
