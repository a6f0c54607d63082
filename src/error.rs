//! Crate-level error types.
//!
//! [`PricedeskError`] unifies every error source (configuration, input
//! validation, HTTP transport, backend-reported failures, missing UI
//! surfaces) behind a single enum so callers can match on the variant they
//! care about while still using the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PricedeskError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum PricedeskError {
    /// Environment or command-line configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The ticker was empty after trimming.
    #[error("ticker is empty")]
    Validation,

    /// The backend answered with a non-2xx HTTP status.
    #[error("HTTP error {status}")]
    HttpStatus { status: u16 },

    /// The request could not be sent or its body could not be decoded.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered successfully but reported `status = error`.
    #[error("{0}")]
    Application(String),

    /// A required UI surface is not present.
    #[error("missing UI surface: {0}")]
    UiBinding(&'static str),

    /// Terminal, log file, or stdout I/O failed.
    #[error("io error: {0}")]
    Io(String),
}

impl PricedeskError {
    /// Returns `true` for network failures and non-2xx responses.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpStatus { .. } | Self::Request(_))
    }
}

impl From<std::io::Error> for PricedeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
