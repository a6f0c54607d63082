//! Renders a price series into the chart and table surfaces.

use tracing::{debug, error};

use super::chart::{
    CLOSE_DATASET_LABEL, ChartConfig, ChartId, ChartOptions, ChartType, Dataset,
};
use super::{PriceView, StatusKind, TableRow};
use crate::Result;
use crate::format::{format_decimal, format_volume_millions};
use crate::models::PriceSeriesResponse;
use crate::session::WorkflowView;

/// Title shown when the response carries no ticker.
pub const TITLE_PLACEHOLDER: &str = "TICKER";

/// Renders series responses and owns the chart it last created.
#[derive(Debug, Default)]
pub struct SeriesRenderer {
    chart: Option<ChartId>,
}

impl SeriesRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle of the chart created by the last render, if any.
    pub fn chart(&self) -> Option<ChartId> {
        self.chart
    }

    /// Writes `response` into the data surfaces of `view`.
    ///
    /// # Errors
    ///
    /// Returns [`PricedeskError::UiBinding`](crate::PricedeskError::UiBinding)
    /// if a data surface is missing; nothing is modified in that case.
    pub fn render(&mut self, view: &mut PriceView, response: &PriceSeriesResponse) -> Result<()> {
        let surfaces = view.data_surfaces().inspect_err(|e| {
            error!(error = %e, "cannot render price series");
        })?;

        let prices = &response.prices;
        let ticker = if response.ticker.is_empty() {
            TITLE_PLACEHOLDER
        } else {
            response.ticker.as_str()
        };

        surfaces.section.visible = !prices.is_empty();
        surfaces.title.text = ticker.to_string();
        surfaces.count.text = format!("{} records found", prices.len());

        if let Some(previous) = self.chart.take()
            && !surfaces.chart.destroy(previous)
        {
            debug!(?previous, "previous chart already gone");
        }

        if !prices.is_empty() {
            let config = ChartConfig {
                chart_type: ChartType::Line,
                labels: prices.iter().map(|p| p.date.clone()).collect(),
                datasets: vec![Dataset {
                    label: CLOSE_DATASET_LABEL.to_string(),
                    data: prices.iter().map(|p| p.close).collect(),
                    tension: 0.2,
                    fill: true,
                }],
                options: ChartOptions::default(),
            };
            self.chart = Some(surfaces.chart.create(config));
        }

        surfaces.table.rows.clear();
        surfaces.table.rows.extend(prices.iter().map(|p| TableRow {
            cells: [
                p.date.clone(),
                format_decimal(p.open),
                format_decimal(p.high),
                format_decimal(p.low),
                format_decimal(p.close),
                format_volume_millions(p.volume),
            ],
        }));

        debug!(ticker, points = prices.len(), "rendered price series");
        Ok(())
    }
}

/// A view together with its renderer, driven directly by a workflow.
#[derive(Debug, Default)]
pub struct PricePage {
    pub view: PriceView,
    pub renderer: SeriesRenderer,
}

impl PricePage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkflowView for PricePage {
    fn set_status(&mut self, kind: StatusKind, message: &str) {
        self.view.set_status(kind, message);
    }

    fn render_series(&mut self, response: &PriceSeriesResponse) -> Result<()> {
        self.renderer.render(&mut self.view, response)
    }
}
