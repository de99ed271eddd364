//! Subcommand handlers.

use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;

use tradejournal_core::accounts::{
    Account, AccountServiceTrait, AmountField, CreateAccountDialog, SubmitOutcome, SubmitPolicy,
};
use tradejournal_core::auth::{LoginData, RegisterData};
use tradejournal_core::catalog::{broker_catalog, Currency, Market};
use tradejournal_core::errors::Error;
use tradejournal_core::journals::JournalServiceTrait;
use tradejournal_core::strategies::StrategyServiceTrait;
use tradejournal_core::utils::{format_currency, format_decimal};

use crate::cli::{AccountsCommand, Command, CreateAccountArgs, RegisterArgs};
use crate::main_lib::AppState;

pub async fn run(command: Command, state: &AppState) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => login(state, email, password).await,
        Command::Register(args) => register(state, args).await,
        Command::Accounts(AccountsCommand::List) => list_accounts(state).await,
        Command::Accounts(AccountsCommand::Create(args)) => create_account(state, args).await,
        Command::Accounts(AccountsCommand::Delete { id }) => {
            state.account_service.list_accounts().await?;
            state.account_service.delete_account(&id).await?;
            Ok(())
        }
        Command::Journals { account } => list_journals(state, account.as_deref()).await,
        Command::Strategies => list_strategies(state).await,
        Command::Brokers => {
            for broker in broker_catalog() {
                let kind = if broker.is_prop_firm { "prop firm" } else { "" };
                println!("{:<16}{}", broker.name, kind);
            }
            Ok(())
        }
        Command::Format { currency, digits } => {
            let currency: Currency = currency.parse().map_err(anyhow::Error::msg)?;
            println!("{}", format_currency(&digits, Some(currency)));
            Ok(())
        }
    }
}

async fn login(state: &AppState, email: String, password: String) -> anyhow::Result<()> {
    let token = state
        .auth_service
        .login(LoginData { email, password })
        .await
        .map_err(report)?;
    println!("{}", token);
    Ok(())
}

async fn register(state: &AppState, args: RegisterArgs) -> anyhow::Result<()> {
    let data = RegisterData {
        first_name: args.first_name,
        last_name: args.last_name,
        username: args.username,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
        phone: args.phone,
    };
    state.auth_service.register(data).await.map_err(report)?;
    println!("Registered, you can now log in");
    Ok(())
}

async fn list_accounts(state: &AppState) -> anyhow::Result<()> {
    let accounts = state.account_service.list_accounts().await?;
    if accounts.is_empty() {
        println!("No accounts yet");
    }
    for account in &accounts {
        print_account(account);
    }
    Ok(())
}

fn print_account(account: &Account) {
    let markets: Vec<&str> = account.market.iter().map(Market::as_str).collect();
    println!(
        "{}  {:<14} {:<4} {:<10} {:>18}  {}{}",
        account.id,
        account.broker,
        account.currency.as_str(),
        account.platform.as_str(),
        format_decimal(account.current_balance, account.currency),
        markets.join(","),
        if account.disabled { "  (disabled)" } else { "" }
    );
}

async fn create_account(state: &AppState, args: CreateAccountArgs) -> anyhow::Result<()> {
    let mut dialog = CreateAccountDialog::new(|open| tracing::debug!("Create dialog open: {}", open))
        .with_policy(SubmitPolicy::AwaitConfirmation);
    dialog.open_change(true);

    let form = dialog.form_mut();
    for market in &args.markets {
        let market: Market = market.parse().map_err(anyhow::Error::msg)?;
        if !form.is_market_selected(market) {
            form.toggle_market(market);
        }
    }
    form.set_currency(&args.currency);
    form.set_platform(&args.platform);
    form.set_broker(&args.broker);
    if let Some(custom) = &args.broker_custom {
        form.set_broker_custom(custom);
    }
    if let Some(prop_firm) = args.prop_firm {
        if !form.set_prop_firm(prop_firm) {
            tracing::warn!("--prop-firm is only used with the Other broker");
        }
    }
    form.input_amount(AmountField::InitialBalance, &args.initial_balance);
    form.input_amount(AmountField::CurrentBalance, &args.current_balance);
    if let Some(credits) = &args.credits {
        form.input_amount(AmountField::Credits, credits);
    }
    form.set_disabled(args.disabled);

    for field in AmountField::ALL {
        let display = form.display(field);
        if !display.is_empty() {
            println!("{:<16}{}", field.path(), display);
        }
    }

    let service: Arc<dyn AccountServiceTrait> = state.account_service.clone();
    match dialog.submit(service).await.map_err(report)? {
        SubmitOutcome::Created(account) => print_account(&account),
        SubmitOutcome::Dispatched => println!("Account submitted"),
    }
    Ok(())
}

async fn list_journals(state: &AppState, account: Option<&str>) -> anyhow::Result<()> {
    state.journal_service.list_journals().await?;
    let journals = match account {
        Some(account_id) => state.journal_service.journals_for_account(account_id),
        None => state.journal_service.journals(),
    };

    let mut total = Decimal::ZERO;
    for journal in &journals {
        total += journal.result.unwrap_or_default();
        println!(
            "{}  {}  {:<10} {:<5} {:<8} entry {} stop {} result {}",
            journal.id,
            journal.trade_date,
            journal.asset,
            journal.direction,
            journal.status,
            journal.entry_price,
            journal.stop_price,
            journal
                .result
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }
    println!("{} entries, net result {}", journals.len(), total);
    Ok(())
}

async fn list_strategies(state: &AppState) -> anyhow::Result<()> {
    state
        .strategy_service
        .list_strategies()
        .await
        .context("Failed to load strategies")?;
    for strategy in state.strategy_service.strategies() {
        println!(
            "{}  {}{}",
            strategy.id,
            strategy.name,
            if strategy.is_default() { " (default)" } else { "" }
        );
    }
    Ok(())
}

/// Prints field errors one per line before failing.
fn report(err: Error) -> anyhow::Error {
    if let Some(errors) = err.field_errors() {
        for (path, messages) in errors.iter() {
            for message in messages {
                eprintln!("{}: {}", path, message);
            }
        }
        return anyhow::anyhow!("{} invalid field(s)", errors.len());
    }
    err.into()
}
