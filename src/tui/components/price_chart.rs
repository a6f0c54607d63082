//! Closing-price line chart.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};
use rust_decimal::prelude::ToPrimitive;

use crate::view::chart::{LineChart, tick_indices};

/// Renders the most recent chart on the canvas, if any.
pub fn render(frame: &mut Frame, area: Rect, chart: Option<&LineChart>) {
    let block = Block::default()
        .title(" Chart ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(chart) = chart else {
        frame.render_widget(
            Paragraph::new("No chart").style(Style::default().fg(Color::DarkGray)).block(block),
            area,
        );
        return;
    };

    let config = &chart.config;
    let Some(dataset) = config.datasets.first() else {
        frame.render_widget(block, area);
        return;
    };

    let points = plot_points(&dataset.data);
    let values: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
    let [y_min, y_max] = y_bounds(&values, config.options.begin_at_zero);
    let x_max = config.labels.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<String> = tick_indices(config.labels.len(), config.options.max_ticks_limit)
        .into_iter()
        .map(|i| config.labels[i].clone())
        .collect();
    let y_labels = vec![
        format!("{y_min:.2}"),
        format!("{:.2}", (y_min + y_max) / 2.0),
        format!("{y_max:.2}"),
    ];

    let series = Dataset::default()
        .name(dataset.label.as_str())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let widget = Chart::new(vec![series])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(widget, area);
}

/// Converts chart data to `(index, value)` pairs, skipping gaps.
pub fn plot_points(data: &[Option<rust_decimal::Decimal>]) -> Vec<(f64, f64)> {
    data.iter()
        .enumerate()
        .filter_map(|(i, v)| v.and_then(|d| d.to_f64()).map(|y| (i as f64, y)))
        .collect()
}

/// Y-axis range for `values`. The floor is zero only when `begin_at_zero`.
pub fn y_bounds(values: &[f64], begin_at_zero: bool) -> [f64; 2] {
    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    if begin_at_zero {
        lo = lo.min(0.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }
    [lo, hi]
}
