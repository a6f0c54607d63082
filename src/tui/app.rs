//! Application state for the TUI.

use crate::view::PricePage;

use super::input::text_input::TextInput;

/// Central application state container.
pub struct App {
    /// View model and renderer shared by every search.
    pub page: PricePage,
    /// Ticker input field.
    pub input: TextInput,
    /// Which control receives keys.
    pub focus: Focus,
    /// Searches started but not yet finished.
    pub searches_in_flight: usize,
    /// Backend base URL, shown in the help line.
    pub api_url: String,
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            page: PricePage::new(),
            input: TextInput::new(),
            focus: Focus::Input,
            searches_in_flight: 0,
            api_url: api_url.into(),
            should_quit: false,
        }
    }

    /// Moves focus to the other control.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::FetchButton,
            Focus::FetchButton => Focus::Input,
        };
    }

    pub fn is_searching(&self) -> bool {
        self.searches_in_flight > 0
    }
}

/// UI focus targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    FetchButton,
}
