//! Raw-mode terminal session.
//!
//! [`TerminalSession`] owns the alternate screen for the lifetime of the
//! interactive UI. The terminal is put back in cooked mode on an explicit
//! [`TerminalSession::restore`], on drop, and on panic.

use std::io::{self, IsTerminal, Stdout};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

use crate::{PricedeskError, Result};

/// Terminal type drawn by the UI.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// An entered alternate-screen session.
pub struct TerminalSession {
    terminal: Tui,
    restored: bool,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns [`PricedeskError::Io`] if stdout is not a TTY or the terminal
    /// cannot be switched. Partial setup is undone before returning.
    pub fn enter() -> Result<Self> {
        require_terminal(io::stdout().is_terminal())?;
        install_panic_hook();

        enable_raw_mode().map_err(|e| io_error("enable raw mode", e))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            leave_best_effort();
            return Err(io_error("enter alternate screen", e));
        }

        match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => Ok(Self {
                terminal,
                restored: false,
            }),
            Err(e) => {
                leave_best_effort();
                Err(io_error("create terminal", e))
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Leaves the alternate screen and shows the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`PricedeskError::Io`] if the terminal refuses a command.
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.restored {
            leave_best_effort();
        }
    }
}

/// Rejects non-interactive stdout with a hint about one-shot mode.
fn require_terminal(is_terminal: bool) -> Result<()> {
    if is_terminal {
        Ok(())
    } else {
        Err(PricedeskError::Io(
            "interactive mode needs a terminal; pass a ticker to run once instead".to_string(),
        ))
    }
}

/// Restores the terminal before the previous panic hook prints its report.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        leave_best_effort();
        previous(info);
    }));
}

fn leave_best_effort() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to disable raw mode");
    }
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn io_error(action: &str, err: io::Error) -> PricedeskError {
    PricedeskError::Io(format!("failed to {action}: {err}"))
}
