//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG` and defaults to `info`. One-shot runs log
//! to stderr; the TUI owns the terminal, so it logs to a file or nowhere.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::Result;

/// Where log lines go.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

/// Installs the global subscriber. Call once, before any work starts.
///
/// # Errors
///
/// Returns [`PricedeskError::Io`](crate::PricedeskError::Io) if the log file
/// cannot be opened.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(open_log_file(path)?))
            .init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

/// Opens `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| crate::PricedeskError::Io(format!("cannot open log file {}: {e}", path.display())))
}
