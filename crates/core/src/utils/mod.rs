pub mod currency_format;

pub use currency_format::{format_currency, format_decimal, parse_minor_units, strip_non_digits};
