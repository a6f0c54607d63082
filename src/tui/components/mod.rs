//! Reusable widgets for the price page.

pub mod price_chart;
pub mod price_table;
pub mod search_bar;
pub mod status_bar;
