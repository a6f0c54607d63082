//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::App;
use super::components::{price_chart, price_table, search_bar, status_bar};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Status
            Constraint::Min(6),    // Data section
            Constraint::Length(1), // Keybindings help
        ])
        .split(frame.area());

    search_bar::render(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);

    if app.page.view.data_visible() {
        render_data_section(frame, main_layout[2], app);
    } else {
        let hint = Paragraph::new("Type a ticker (e.g. AAPL) and press Enter.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, main_layout[2]);
    }

    render_keybindings(frame, main_layout[3], app);
}

/// Renders the title, record count, chart, and table.
fn render_data_section(frame: &mut Frame, area: Rect, app: &App) {
    let view = &app.page.view;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(55),
            Constraint::Min(4),
        ])
        .split(area);

    let title = view.ticker_title.as_ref().map_or("", |l| l.text.as_str());
    let count = view.data_count.as_ref().map_or("", |l| l.text.as_str());
    let header = Line::from(vec![
        Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(count.to_string(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header), layout[0]);

    let chart = view.price_chart.as_ref().and_then(|c| c.current());
    price_chart::render(frame, layout[1], chart);
    price_table::render(frame, layout[2], view.rows());
}

/// Renders the key help line.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let line = Line::from(vec![
        Span::styled(" Enter", key),
        Span::raw(" fetch  "),
        Span::styled("Tab", key),
        Span::raw(" focus  "),
        Span::styled("Esc", key),
        Span::raw(" quit  "),
        Span::styled(format!("│ {}", app.api_url), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
