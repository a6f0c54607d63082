//! Line chart descriptions and the canvas that hosts them.
//!
//! A [`ChartCanvas`] owns chart instances. Callers get a [`ChartId`] back
//! from [`ChartCanvas::create`] and must [`ChartCanvas::destroy`] it before
//! creating a replacement, otherwise both stay live on the canvas.

use rust_decimal::Decimal;

/// Label of the closing-price dataset.
pub const CLOSE_DATASET_LABEL: &str = "Closing price (USD)";

/// Upper bound on rendered x-axis labels.
pub const MAX_X_TICKS: usize = 12;

/// Chart kind. Only line charts are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartType {
    #[default]
    Line,
}

/// A single plotted series.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    /// One entry per label; `None` leaves a gap.
    pub data: Vec<Option<Decimal>>,
    /// Curve smoothing factor.
    pub tension: f64,
    /// Whether the area under the line is shaded.
    pub fill: bool,
}

/// Axis and layout options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub max_ticks_limit: usize,
    pub begin_at_zero: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            max_ticks_limit: MAX_X_TICKS,
            begin_at_zero: false,
        }
    }
}

/// Everything needed to construct a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

/// Handle to a chart living on a [`ChartCanvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChartId(u64);

/// A constructed chart instance.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub id: ChartId,
    pub config: ChartConfig,
}

/// Drawing surface for charts.
#[derive(Clone, Debug, Default)]
pub struct ChartCanvas {
    live: Vec<LineChart>,
    next_id: u64,
    created: u64,
    destroyed: u64,
}

impl ChartCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a chart on this canvas and returns its handle.
    pub fn create(&mut self, config: ChartConfig) -> ChartId {
        let id = ChartId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.live.push(LineChart { id, config });
        id
    }

    /// Tears down a chart. Returns `false` if the handle was not live.
    pub fn destroy(&mut self, id: ChartId) -> bool {
        let before = self.live.len();
        self.live.retain(|chart| chart.id != id);
        let removed = self.live.len() < before;
        if removed {
            self.destroyed += 1;
        }
        removed
    }

    /// Charts currently on the canvas, oldest first.
    pub fn live(&self) -> &[LineChart] {
        &self.live
    }

    /// The most recently created live chart.
    pub fn current(&self) -> Option<&LineChart> {
        self.live.last()
    }

    pub fn created_count(&self) -> u64 {
        self.created
    }

    pub fn destroyed_count(&self) -> u64 {
        self.destroyed
    }
}

/// Picks at most `limit` evenly spaced label indices, always including the
/// first and last.
pub fn tick_indices(len: usize, limit: usize) -> Vec<usize> {
    if len == 0 || limit == 0 {
        return Vec::new();
    }
    if len <= limit {
        return (0..len).collect();
    }
    if limit == 1 {
        return vec![0];
    }

    let last = len - 1;
    let steps = limit - 1;
    let mut indices: Vec<usize> = (0..limit).map(|i| i * last / steps).collect();
    indices.dedup();
    indices
}
