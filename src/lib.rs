//! Stock price desk client library.
//!
//! Drives a stock-price backend through its collect-and-persist and
//! series-read endpoints, and renders the persisted series as a line chart
//! and a table, either in a terminal UI or as a plain-text report.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod report;
pub mod session;
pub mod tui;
pub mod view;

pub use error::{PricedeskError, Result};
