//! Price history table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::view::{TABLE_HEADERS, TableRow};

/// Renders as many of the newest rows as fit, keeping source order.
pub fn render(frame: &mut Frame, area: Rect, rows: &[TableRow]) {
    // Borders and the header line take three rows.
    let capacity = area.height.saturating_sub(3) as usize;
    let visible = &rows[rows.len().saturating_sub(capacity)..];

    let header = Row::new(TABLE_HEADERS.iter().enumerate().map(|(i, h)| cell(h, i)))
        .style(Style::default().add_modifier(Modifier::BOLD));

    let body = visible
        .iter()
        .map(|row| Row::new(row.cells.iter().enumerate().map(|(i, c)| cell(c, i))));

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
    ];

    let title = if visible.len() < rows.len() {
        format!(" Prices (last {} of {}) ", visible.len(), rows.len())
    } else {
        " Prices ".to_string()
    };

    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(table, area);
}

/// Dates are left-aligned, numbers right-aligned.
fn cell(text: &str, column: usize) -> Cell<'static> {
    let line = Line::from(text.to_string());
    if column == 0 {
        Cell::from(line)
    } else {
        Cell::from(line.right_aligned())
    }
}
