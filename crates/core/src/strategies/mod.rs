//! Strategies module - trading strategies, service, and traits.

mod strategies_model;
mod strategies_service;
mod strategies_traits;


pub use strategies_model::{NewStrategy, Strategy, StrategyUpdate};
pub use strategies_service::StrategyService;
pub use strategies_traits::{StrategyRepositoryTrait, StrategyServiceTrait};
