//! Terminal user interface for pricedesk.
//!
//! Provides a Ratatui-based TUI with a ticker input, a status line, and a
//! data section holding the closing-price chart and the price table.

pub mod app;
pub mod bridge;
pub mod components;
pub mod event;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use bridge::{UiBridge, spawn_search};
pub use event::{Action, Event, Message};
pub use terminal::{TerminalSession, Tui};
pub use ui::render;

use tokio::sync::mpsc;
use tracing::info;

use crate::Result;
use crate::client::HttpPriceApi;

/// Runs the interactive UI until the user quits.
///
/// The terminal is restored even when the loop fails.
pub async fn run(api: HttpPriceApi) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    let result = event_loop(session.terminal_mut(), api).await;
    session.restore()?;
    result
}

async fn event_loop(terminal: &mut Tui, api: HttpPriceApi) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(tx.clone());

    let mut app = App::new(api.base_url());
    info!(api_url = api.base_url(), "interactive session started");

    loop {
        terminal.draw(|frame| render(frame, &app))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        if let Some(Action::Search(raw_input)) = event::update(&mut app, message) {
            spawn_search(api.clone(), tx.clone(), raw_input);
        }
        if app.should_quit {
            break;
        }
    }

    info!("interactive session ended");
    Ok(())
}
