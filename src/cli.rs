use clap::Parser;

/// Collect, persist and chart daily stock prices.
///
/// Without a ticker an interactive terminal UI starts. With a ticker one
/// search runs and the result is printed.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Ticker to fetch once, e.g. AAPL.
    pub ticker: Option<String>,

    /// Backend base URL [env: PRICEDESK_API_URL].
    #[arg(long)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds [env: PRICEDESK_TIMEOUT_SECS].
    #[arg(long)]
    pub timeout: Option<u64>,
}
