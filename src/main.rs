mod cli;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use pricedesk::client::HttpPriceApi;
use pricedesk::config::{ConfigOverrides, fetch_config_with};
use pricedesk::logging::{self, LogTarget};
use pricedesk::session::PriceSessionController;
use pricedesk::view::PricePage;
use pricedesk::{PricedeskError, report, tui};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, PricedeskError> {
    let app_config = fetch_config_with(&ConfigOverrides {
        api_url: cli.api_url,
        timeout_secs: cli.timeout,
    })?;

    let api = HttpPriceApi::new(&app_config.backend)?;

    match cli.ticker {
        Some(ticker) => {
            logging::init(LogTarget::Stderr)?;
            let mut controller = PriceSessionController::new(api, PricePage::new());
            let outcome = controller.handle_search(&ticker).await;

            let text = report::render_text(&controller.view().view);
            std::io::stdout().lock().write_all(text.as_bytes())?;

            Ok(if outcome.is_rendered() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        None => {
            match app_config.log_file.as_deref() {
                Some(path) => logging::init(LogTarget::File(path))?,
                None => logging::init(LogTarget::Discard)?,
            }
            tui::run(api).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
