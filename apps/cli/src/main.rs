mod cli;
mod commands;
mod main_lib;

use clap::Parser;

use cli::Cli;
use main_lib::{build_config, build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    let config = build_config(&cli);
    let state = build_state(&config)?;
    tracing::debug!("Using API at {}", config.base_url);

    commands::run(cli.command, &state).await
}
