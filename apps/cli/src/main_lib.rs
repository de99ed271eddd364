use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use tradejournal_api::{
    AccountRepository, ApiClient, ApiConfig, JournalRepository, StrategyRepository,
};
use tradejournal_core::{
    accounts::AccountService,
    auth::AuthService,
    journals::JournalService,
    notifications::{LogNotificationSink, NotificationSink},
    strategies::StrategyService,
};

use crate::cli::Cli;

pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub journal_service: Arc<JournalService>,
    pub strategy_service: Arc<StrategyService>,
    pub auth_service: AuthService,
}

pub fn init_tracing() {
    let log_format =
        std::env::var("TRADEJOURNAL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Environment configuration with command line flags taking precedence.
pub fn build_config(cli: &Cli) -> ApiConfig {
    let mut config = ApiConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(token) = &cli.token {
        config = config.with_token(token.clone());
    }
    config
}

pub fn build_state(config: &ApiConfig) -> anyhow::Result<AppState> {
    let client = Arc::new(ApiClient::new(config)?);
    let notifier: Arc<dyn NotificationSink> = Arc::new(LogNotificationSink);

    let account_service = Arc::new(AccountService::new(
        Arc::new(AccountRepository::new(client.clone())),
        notifier.clone(),
    ));
    let journal_service = Arc::new(JournalService::new(
        Arc::new(JournalRepository::new(client.clone())),
        notifier.clone(),
    ));
    let strategy_service = Arc::new(StrategyService::new(
        Arc::new(StrategyRepository::new(client.clone())),
        notifier,
    ));
    let auth_service = AuthService::new(client);

    Ok(AppState {
        account_service,
        journal_service,
        strategy_service,
        auth_service,
    })
}
