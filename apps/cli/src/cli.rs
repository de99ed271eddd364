use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tradejournal", author, version, about = "Trade journal client", long_about = None)]
pub struct Cli {
    /// Base URL of the trade journal API
    #[arg(long, global = true, env = "TRADEJOURNAL_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Session token returned by `login`
    #[arg(long, global = true, env = "TRADEJOURNAL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and print the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TRADEJOURNAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create a user
    Register(RegisterArgs),
    /// Manage trading accounts
    #[command(subcommand)]
    Accounts(AccountsCommand),
    /// List journal entries
    Journals {
        /// Only entries of this account
        #[arg(long)]
        account: Option<String>,
    },
    /// List strategies
    Strategies,
    /// Print the broker catalog
    Brokers,
    /// Format typed digits as a currency amount
    Format {
        #[arg(long, default_value = "USD")]
        currency: String,
        digits: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountsCommand {
    List,
    Create(CreateAccountArgs),
    Delete { id: String },
}

#[derive(Args, Debug)]
pub struct CreateAccountArgs {
    /// EXCHANGE, CRYPTO or FOREX; repeat for several
    #[arg(long = "market")]
    pub markets: Vec<String>,
    #[arg(long)]
    pub currency: String,
    #[arg(long)]
    pub platform: String,
    /// Catalog broker, or "Other" together with --broker-custom
    #[arg(long)]
    pub broker: String,
    #[arg(long)]
    pub broker_custom: Option<String>,
    /// Only used with the "Other" broker
    #[arg(long)]
    pub prop_firm: Option<bool>,
    /// Typed as minor units: 1000000 is 10.000,00
    #[arg(long)]
    pub initial_balance: String,
    #[arg(long)]
    pub current_balance: String,
    #[arg(long)]
    pub credits: Option<String>,
    #[arg(long)]
    pub disabled: bool,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long, env = "TRADEJOURNAL_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
}
