//! Wire models for the price backend's JSON API.
//!
//! Contains the response status shared by both endpoints, the
//! collect-and-persist request/response pair, and re-exports of the ticker
//! and price series types.

pub mod price;
pub mod ticker;

use serde::{Deserialize, Deserializer, Serialize};

pub use price::{PricePoint, PriceSeriesResponse};
pub use ticker::TickerSymbol;

/// Outcome tag carried by every backend response body.
///
/// Unrecognized, missing, or `null` values decode as [`ResponseStatus::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Warning,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ResponseStatus {
    /// Returns the wire-format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Success => "success",
            ResponseStatus::Warning => "warning",
            ResponseStatus::Error => "error",
            ResponseStatus::Unknown => "unknown",
        }
    }
}

/// Body of `POST /api/fetch-and-save`.
#[derive(Debug, Serialize)]
pub struct FetchRequest<'a> {
    pub ticker: &'a str,
}

/// Response of `POST /api/fetch-and-save`. Carries no price data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationOutcome {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: Option<String>,
    /// Rows written by the backend.
    #[serde(default)]
    pub inserted: Option<u64>,
    /// Rows dropped by the backend because a field was missing.
    #[serde(default)]
    pub skipped: Option<u64>,
    /// Backend-side exception text, present on server errors.
    #[serde(default)]
    pub detail: Option<String>,
}

/// Decodes `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns `message` when it is present and non-empty, else `fallback`.
pub(crate) fn message_or(message: Option<&str>, fallback: &str) -> String {
    match message {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => fallback.to_string(),
    }
}
