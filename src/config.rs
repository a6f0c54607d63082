//! Application configuration loaded from environment variables.
//!
//! All values are optional:
//! - `PRICEDESK_API_URL`: base URL of the price backend
//! - `PRICEDESK_TIMEOUT_SECS`: per-request HTTP timeout in seconds
//! - `PRICEDESK_LOG_FILE`: file that receives logs while the TUI owns the terminal
//!
//! Command-line flags override the environment (see `main.rs`).

use std::path::PathBuf;
use std::time::Duration;

/// Default backend endpoint (the development server address).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub log_file: Option<PathBuf>,
}

/// Backend connection values.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL without a trailing slash.
    pub api_url: String,
    pub timeout: Duration,
}

impl BackendConfig {
    /// Validates and normalizes a base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PricedeskError::Config`](crate::PricedeskError::Config) if the
    /// URL is not http(s) or the timeout is zero.
    pub fn new(api_url: &str, timeout_secs: u64) -> crate::Result<Self> {
        let api_url = api_url.trim().trim_end_matches('/');
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(crate::PricedeskError::Config(format!(
                "API URL must start with http:// or https://, got '{api_url}'"
            )));
        }
        if timeout_secs == 0 {
            return Err(crate::PricedeskError::Config(
                "timeout must be at least one second".to_string(),
            ));
        }

        Ok(Self {
            api_url: api_url.to_string(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Loads the application configuration from environment variables.
///
/// The API URL defaults to `http://127.0.0.1:5000` and the timeout to 30
/// seconds. Empty variables are treated as unset.
///
/// # Errors
///
/// Returns [`PricedeskError::Config`](crate::PricedeskError::Config) if the
/// URL is malformed or `PRICEDESK_TIMEOUT_SECS` is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    fetch_config_with(&ConfigOverrides::default())
}

/// Like [`fetch_config`], but an overridden value replaces its variable
/// entirely; the variable is neither read nor validated.
pub fn fetch_config_with(overrides: &ConfigOverrides) -> crate::Result<AppConfig> {
    let api_url = match &overrides.api_url {
        Some(url) => url.clone(),
        None => non_empty_var("PRICEDESK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
    };

    let timeout_secs = match overrides.timeout_secs {
        Some(secs) => secs,
        None => match non_empty_var("PRICEDESK_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                crate::PricedeskError::Config(format!(
                    "PRICEDESK_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        },
    };

    Ok(AppConfig {
        backend: BackendConfig::new(&api_url, timeout_secs)?,
        log_file: non_empty_var("PRICEDESK_LOG_FILE").map(PathBuf::from),
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
