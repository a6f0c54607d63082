//! Display formatting for price table cells.
//!
//! Every function here is total: missing or invalid input renders as
//! [`PLACEHOLDER`] instead of failing.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Rendered in place of a missing or invalid number.
pub const PLACEHOLDER: &str = "-";

const ONE_MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Formats a price with exactly two fractional digits.
pub fn format_decimal(value: Option<Decimal>) -> String {
    match value {
        Some(v) => two_places(v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Formats a share count in millions, e.g. `14790000` becomes `"14.79 M"`.
pub fn format_volume_millions(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{} M", two_places(v / ONE_MILLION)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Parses a JSON number or numeric string. Anything else is `None`.
pub fn parse_lenient(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_str(&n.to_string()),
        Value::String(s) => parse_str(s.trim()),
        _ => None,
    }
}

fn parse_str(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

fn two_places(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
