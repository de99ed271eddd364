use async_trait::async_trait;

use super::strategies_model::{NewStrategy, Strategy, StrategyUpdate};
use crate::errors::Result;

/// Trait defining the contract for the remote strategy collection.
#[async_trait]
pub trait StrategyRepositoryTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Strategy>>;

    async fn create(&self, new_strategy: NewStrategy) -> Result<Strategy>;

    async fn update(&self, strategy_id: &str, strategy_update: StrategyUpdate)
        -> Result<Strategy>;

    async fn delete(&self, strategy_id: &str) -> Result<()>;
}

/// Trait defining the contract for Strategy service operations.
#[async_trait]
pub trait StrategyServiceTrait: Send + Sync {
    async fn list_strategies(&self) -> Result<Vec<Strategy>>;

    fn strategies(&self) -> Vec<Strategy>;

    fn get_strategy(&self, strategy_id: &str) -> Result<Strategy>;

    /// The strategy flagged as default, if any.
    fn default_strategy(&self) -> Option<Strategy>;

    async fn create_strategy(&self, new_strategy: NewStrategy) -> Result<Strategy>;

    async fn update_strategy(
        &self,
        strategy_id: &str,
        strategy_update: StrategyUpdate,
    ) -> Result<Strategy>;

    async fn delete_strategy(&self, strategy_id: &str) -> Result<()>;
}
