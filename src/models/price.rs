//! Persisted price series models.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use super::{ResponseStatus, null_as_default};
use crate::format::parse_lenient;

/// Response of `GET /api/prices/{ticker}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceSeriesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticker: String,
    /// Record count as reported by the backend. Rendering uses `prices.len()`.
    #[serde(default)]
    pub count: Option<u64>,
    /// Observations in source order (chronological).
    #[serde(default, deserialize_with = "null_as_default")]
    pub prices: Vec<PricePoint>,
}

/// One daily OHLCV observation.
///
/// Numeric fields that are missing, `null`, or unparseable decode as `None`.
/// A `null` date decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PricePoint {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub open: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub high: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub low: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub close: Option<Decimal>,
    /// Share count.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub volume: Option<Decimal>,
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_lenient))
}
