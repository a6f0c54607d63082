//! Validated ticker symbols.

use std::fmt;

use crate::{PricedeskError, Result};

/// A trimmed, upper-cased, non-empty security identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    /// Normalizes raw user input into a ticker.
    ///
    /// # Errors
    ///
    /// Returns [`PricedeskError::Validation`] if the input trims to empty.
    pub fn parse(raw: &str) -> Result<Self> {
        let ticker = raw.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(PricedeskError::Validation);
        }
        Ok(Self(ticker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for use as a URL path segment.
    pub fn url_encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
