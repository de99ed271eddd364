use log::debug;
use std::sync::Arc;

use super::strategies_model::{NewStrategy, Strategy, StrategyUpdate};
use super::strategies_traits::{StrategyRepositoryTrait, StrategyServiceTrait};
use crate::constants::STRATEGIES_QUERY_KEY;
use crate::errors::{Error, Result};
use crate::notifications::NotificationSink;
use crate::store::{CollectionStore, StoreMessages};

// Failures show the server message or the error itself.
const STRATEGY_MESSAGES: StoreMessages = StoreMessages {
    created: "Strategy created successfully!",
    updated: "Strategy updated successfully!",
    deleted: "Strategy removed successfully!",
    create_failed: None,
    update_failed: None,
    delete_failed: None,
};

/// Service for managing strategies
pub struct StrategyService {
    repository: Arc<dyn StrategyRepositoryTrait>,
    store: CollectionStore<Strategy>,
}

impl StrategyService {
    pub fn new(
        repository: Arc<dyn StrategyRepositoryTrait>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            repository,
            store: CollectionStore::new(STRATEGIES_QUERY_KEY, notifier, STRATEGY_MESSAGES),
        }
    }
}

#[async_trait::async_trait]
impl StrategyServiceTrait for StrategyService {
    async fn list_strategies(&self) -> Result<Vec<Strategy>> {
        self.store.load(self.repository.list()).await
    }

    fn strategies(&self) -> Vec<Strategy> {
        self.store.cache().snapshot()
    }

    fn get_strategy(&self, strategy_id: &str) -> Result<Strategy> {
        self.store
            .cache()
            .get(strategy_id)
            .ok_or_else(|| Error::NotFound(format!("Strategy {}", strategy_id)))
    }

    fn default_strategy(&self) -> Option<Strategy> {
        self.strategies().into_iter().find(Strategy::is_default)
    }

    async fn create_strategy(&self, new_strategy: NewStrategy) -> Result<Strategy> {
        new_strategy.validate()?;
        debug!("Creating strategy..., name: {}", new_strategy.name);
        self.store
            .create(self.repository.create(new_strategy))
            .await
    }

    async fn update_strategy(
        &self,
        strategy_id: &str,
        strategy_update: StrategyUpdate,
    ) -> Result<Strategy> {
        strategy_update.validate()?;
        let optimistic = self
            .store
            .cache()
            .get(strategy_id)
            .map(|strategy| strategy.apply_update(&strategy_update));
        self.store
            .update(
                strategy_id,
                optimistic,
                self.repository.update(strategy_id, strategy_update),
            )
            .await
    }

    async fn delete_strategy(&self, strategy_id: &str) -> Result<()> {
        self.store
            .delete(strategy_id, self.repository.delete(strategy_id))
            .await
    }
}
