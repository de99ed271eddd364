//! Market, currency and platform enumerations.
//!
//! Each enumeration maps a machine code (what the API stores) to a display
//! label (what a select box shows).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market an account trades on. An account may trade on several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Market {
    Exchange,
    Crypto,
    Forex,
}

impl Market {
    pub const ALL: [Market; 3] = [Market::Exchange, Market::Crypto, Market::Forex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Exchange => "EXCHANGE",
            Market::Crypto => "CRYPTO",
            Market::Forex => "FOREX",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Market::Exchange => "Stock exchange (B3)",
            Market::Crypto => "Cryptocurrencies",
            Market::Forex => "Forex",
        }
    }
}

impl FromStr for Market {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Market::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("Unknown market: {}", s))
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account currency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Aud,
    Brl,
    Cad,
    Chf,
    Czk,
    Eur,
    Gbp,
    #[default]
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Currency::Aud,
        Currency::Brl,
        Currency::Cad,
        Currency::Chf,
        Currency::Czk,
        Currency::Eur,
        Currency::Gbp,
        Currency::Usd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Aud => "AUD",
            Currency::Brl => "BRL",
            Currency::Cad => "CAD",
            Currency::Chf => "CHF",
            Currency::Czk => "CZK",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::Aud => "Australian Dollar",
            Currency::Brl => "Brazilian Real",
            Currency::Cad => "Canadian Dollar",
            Currency::Chf => "Swiss Franc",
            Currency::Czk => "Czech Koruna",
            Currency::Eur => "Euro",
            Currency::Gbp => "Pound Sterling",
            Currency::Usd => "US Dollar",
        }
    }

    /// Symbol printed in front of amounts, as rendered by the pt-BR locale.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Aud => "AU$",
            Currency::Brl => "R$",
            Currency::Cad => "CA$",
            Currency::Chf => "CHF",
            Currency::Czk => "CZK",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Usd => "US$",
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Currency '{}' is not supported", s))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trading platform the account is operated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    Mt4,
    Mt5,
    Ctrader,
    DxTrade,
    MatchTrader,
    TradeLocker,
    Profit,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Mt4,
        Platform::Mt5,
        Platform::Ctrader,
        Platform::DxTrade,
        Platform::MatchTrader,
        Platform::TradeLocker,
        Platform::Profit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Mt4 => "MT4",
            Platform::Mt5 => "MT5",
            Platform::Ctrader => "CTRADER",
            Platform::DxTrade => "DX_TRADE",
            Platform::MatchTrader => "MATCH_TRADER",
            Platform::TradeLocker => "TRADE_LOCKER",
            Platform::Profit => "PROFIT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Mt4 => "MetaTrader 4",
            Platform::Mt5 => "MetaTrader 5",
            Platform::Ctrader => "cTrader",
            Platform::DxTrade => "DxTrade",
            Platform::MatchTrader => "Match Trader",
            Platform::TradeLocker => "Trade Locker",
            Platform::Profit => "Profit",
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown platform: {}", s))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
