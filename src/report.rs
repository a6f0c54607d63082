//! Plain-text rendering of a [`PriceView`] for one-shot, non-interactive use.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::view::{PriceView, StatusKind, TABLE_HEADERS};

/// Renders the visible parts of `view` as text.
///
/// The status line comes first, then (when the data section is shown) the
/// title, the record count, a chart summary, and the price table.
pub fn render_text(view: &PriceView) -> String {
    let mut out = String::new();

    if let Some(slot) = view.status.as_ref().filter(|s| s.visible) {
        match slot.kind {
            Some(kind) if kind != StatusKind::None => {
                let _ = writeln!(out, "[{}] {}", kind.label(), slot.text);
            }
            _ => {
                let _ = writeln!(out, "{}", slot.text);
            }
        }
    }

    if !view.data_visible() {
        return out;
    }

    let title = view.ticker_title.as_ref().map_or("", |l| l.text.as_str());
    let count = view.data_count.as_ref().map_or("", |l| l.text.as_str());
    let _ = writeln!(out, "\n{title} ({count})");

    if let Some(chart) = view.price_chart.as_ref().and_then(|c| c.current())
        && let (Some(first), Some(last)) = (chart.config.labels.first(), chart.config.labels.last())
    {
        let _ = writeln!(
            out,
            "chart: {} points, {first} .. {last}",
            chart.config.labels.len()
        );
    }

    let rows: Vec<Vec<&str>> = view
        .rows()
        .iter()
        .map(|r| r.cells.iter().map(String::as_str).collect())
        .collect();

    let mut widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    out.push('\n');
    push_row(&mut out, &TABLE_HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule.iter().map(String::as_str).collect::<Vec<_>>(), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }

    out
}

/// Appends one table line: the date column left-aligned, numbers right-aligned.
fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let pad = width.saturating_sub(cell.width());
        if i > 0 {
            line.push_str("  ");
        }
        if i == 0 {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        } else {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{PricePoint, PriceSeriesResponse, ResponseStatus};
    use crate::view::SeriesRenderer;

    #[test]
    fn hidden_status_and_data_render_nothing() {
        assert_eq!(render_text(&PriceView::new()), "");
    }

    #[test]
    fn status_only_when_no_data() {
        let mut view = PriceView::new();
        view.set_status(StatusKind::Error, "rate limited");
        assert_eq!(render_text(&view), "[error] rate limited\n");
    }

    #[test]
    fn table_is_aligned() {
        let mut view = PriceView::new();
        view.set_status(StatusKind::Success, "Data collected successfully.");
        let response = PriceSeriesResponse {
            status: ResponseStatus::Success,
            ticker: "AAPL".to_string(),
            prices: vec![PricePoint {
                date: "2024-01-02".to_string(),
                open: Some(dec!(187.15)),
                high: Some(dec!(188.44)),
                low: Some(dec!(183.89)),
                close: Some(dec!(185.64)),
                volume: Some(dec!(82488700)),
            }],
            ..Default::default()
        };
        SeriesRenderer::new().render(&mut view, &response).unwrap();

        let text = render_text(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[success] Data collected successfully.");
        assert_eq!(lines[2], "AAPL (1 records found)");
        assert_eq!(lines[3], "chart: 1 points, 2024-01-02 .. 2024-01-02");
        assert_eq!(lines[5], "Date          Open    High     Low   Close   Volume");
        assert_eq!(lines[7], "2024-01-02  187.15  188.44  183.89  185.64  82.49 M");
    }
}
