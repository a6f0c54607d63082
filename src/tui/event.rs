//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::models::PriceSeriesResponse;
use crate::view::StatusKind;

use super::app::{App, Focus};

/// Events that can occur in the terminal.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// A search replaced the status message.
    Status { kind: StatusKind, message: String },
    /// A search loaded a series to display.
    Series(PriceSeriesResponse),
    /// A search reached a terminal state.
    SearchFinished { rendered: bool },
}

/// Actions that require external handling.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Start a search with the raw input text.
    Search(String),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {
                    if tx.is_closed() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(Event::Key(key)) => handle_key(app, key),
        Message::Input(Event::Resize(_, _)) => None,
        Message::Status { kind, message } => {
            app.page.view.set_status(kind, &message);
            None
        }
        Message::Series(response) => {
            // The status line keeps whatever the search last reported.
            if let Err(e) = app.page.renderer.render(&mut app.page.view, &response) {
                error!(error = %e, "dropping series update");
            }
            None
        }
        Message::SearchFinished { rendered } => {
            app.searches_in_flight = app.searches_in_flight.saturating_sub(1);
            debug!(rendered, in_flight = app.searches_in_flight, "search finished");
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global keys
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return None;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return None;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            return None;
        }
        KeyCode::Enter => {
            app.searches_in_flight += 1;
            return Some(Action::Search(app.input.as_str().to_string()));
        }
        _ => {}
    }

    if app.focus != Focus::Input {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => app.input.insert(c),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_home(),
        KeyCode::End => app.input.move_end(),
        _ => {}
    }
    None
}
