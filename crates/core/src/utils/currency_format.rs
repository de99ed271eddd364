//! Currency input masking.
//!
//! Amount inputs are typed as a run of digits read as minor units (cents):
//! typing `1`, `0`, `0`, `0` shows `R$ 10,00`. Rendering follows the pt-BR
//! conventions: currency symbol, a non-breaking space, `.` as the thousands
//! separator and `,` before the two fraction digits.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::catalog::Currency;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, MAX_AMOUNT_DIGITS, MINOR_UNIT_SCALE};

const NBSP: char = '\u{a0}';

/// Removes every character that is not an ASCII digit.
pub fn strip_non_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Digits of `text` without leading zeros, capped at [`MAX_AMOUNT_DIGITS`].
///
/// Returns `None` when `text` holds no digit at all.
fn significant_digits(text: &str) -> Option<String> {
    let digits = strip_non_digits(text);
    if digits.is_empty() {
        return None;
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return Some("0".to_string());
    }
    Some(trimmed.chars().take(MAX_AMOUNT_DIGITS).collect())
}

fn minor_units(text: &str) -> Option<u64> {
    significant_digits(text).and_then(|digits| digits.parse::<u64>().ok())
}

/// Reads the digits of `text` as minor units and returns the amount.
///
/// Empty input yields zero.
pub fn parse_minor_units(text: &str) -> Decimal {
    minor_units(text)
        .and_then(|units| i64::try_from(units).ok())
        .map(|units| Decimal::new(units, MINOR_UNIT_SCALE))
        .unwrap_or(Decimal::ZERO)
}

/// Formats typed text as a currency amount for display.
///
/// An input without digits gives an empty string rather than a zero amount,
/// so a cleared field stays blank. Formatting falls back to USD while no
/// currency is selected. Re-applying the function to the digits of its own
/// output gives the same string.
pub fn format_currency(text: &str, currency: Option<Currency>) -> String {
    match minor_units(text) {
        Some(units) => render(units, currency.unwrap_or_default()),
        None => String::new(),
    }
}

/// Formats a stored amount (balances returned by the API) for display.
///
/// The integer part is rendered from the decimal's own digits, so amounts
/// beyond the typed-input cap still display in full.
pub fn format_decimal(amount: Decimal, currency: Currency) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    let magnitude = rounded.abs();
    let integer = magnitude.trunc().to_string();
    let cents = (magnitude.fract() * Decimal::ONE_HUNDRED)
        .trunc()
        .to_u64()
        .unwrap_or_default();
    let formatted = render_parts(&integer, cents, currency);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

fn render(units: u64, currency: Currency) -> String {
    render_parts(&(units / 100).to_string(), units % 100, currency)
}

fn render_parts(integer: &str, cents: u64, currency: Currency) -> String {
    format!(
        "{}{}{},{:02}",
        currency.symbol(),
        NBSP,
        group_thousands(integer),
        cents
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
