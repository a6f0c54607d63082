//! View model for the price page.
//!
//! [`PriceView`] holds every UI surface the workflow writes to. Surfaces are
//! optional so a front end can omit one; writers treat an absent surface as
//! a binding error (see [`PricedeskError::UiBinding`]).

pub mod chart;
pub mod renderer;
pub mod status;

pub use chart::{ChartCanvas, ChartConfig, ChartId, LineChart};
pub use renderer::{PricePage, SeriesRenderer};
pub use status::{StatusKind, StatusSlot};

use crate::{PricedeskError, Result};

/// Container for the chart, table, and their headings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSection {
    pub visible: bool,
}

/// A single line of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Label {
    pub text: String,
}

/// One rendered table row: date, open, high, low, close, volume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub cells: [String; 6],
}

impl TableRow {
    pub fn date(&self) -> &str {
        &self.cells[0]
    }

    pub fn close(&self) -> &str {
        &self.cells[4]
    }

    pub fn volume(&self) -> &str {
        &self.cells[5]
    }
}

/// Rows of the price table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableBody {
    pub rows: Vec<TableRow>,
}

/// Column headings matching [`TableRow::cells`].
pub const TABLE_HEADERS: [&str; 6] = ["Date", "Open", "High", "Low", "Close", "Volume"];

/// Every surface of the price page.
#[derive(Clone, Debug)]
pub struct PriceView {
    pub status: Option<StatusSlot>,
    pub data_section: Option<DataSection>,
    pub ticker_title: Option<Label>,
    pub data_count: Option<Label>,
    pub table_body: Option<TableBody>,
    pub price_chart: Option<ChartCanvas>,
}

impl PriceView {
    /// Creates a view with every surface present and the data section hidden.
    pub fn new() -> Self {
        Self {
            status: Some(StatusSlot::default()),
            data_section: Some(DataSection::default()),
            ticker_title: Some(Label::default()),
            data_count: Some(Label::default()),
            table_body: Some(TableBody::default()),
            price_chart: Some(ChartCanvas::new()),
        }
    }

    /// Whether the data section is present and shown.
    pub fn data_visible(&self) -> bool {
        self.data_section.as_ref().is_some_and(|s| s.visible)
    }

    /// Rows currently in the table, or none if the surface is absent.
    pub fn rows(&self) -> &[TableRow] {
        self.table_body.as_ref().map_or(&[], |t| t.rows.as_slice())
    }

    /// Borrows all data surfaces at once, or names the first missing one.
    pub(crate) fn data_surfaces(&mut self) -> Result<DataSurfaces<'_>> {
        let PriceView {
            data_section,
            ticker_title,
            data_count,
            table_body,
            price_chart,
            ..
        } = self;

        Ok(DataSurfaces {
            section: data_section
                .as_mut()
                .ok_or(PricedeskError::UiBinding("data section"))?,
            title: ticker_title
                .as_mut()
                .ok_or(PricedeskError::UiBinding("ticker title"))?,
            count: data_count
                .as_mut()
                .ok_or(PricedeskError::UiBinding("data count"))?,
            table: table_body
                .as_mut()
                .ok_or(PricedeskError::UiBinding("table body"))?,
            chart: price_chart
                .as_mut()
                .ok_or(PricedeskError::UiBinding("price chart"))?,
        })
    }
}

impl Default for PriceView {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable borrows of the surfaces a render touches.
pub(crate) struct DataSurfaces<'a> {
    pub section: &'a mut DataSection,
    pub title: &'a mut Label,
    pub count: &'a mut Label,
    pub table: &'a mut TableBody,
    pub chart: &'a mut ChartCanvas,
}
