//! Ticker input and fetch button.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Focus};

const BUTTON_LABEL: &str = " Fetch ";

/// Renders the input box and the button beside it.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(11)])
        .split(area);

    let input_focused = app.focus == Focus::Input;
    let border_style = if input_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input_block = Block::default()
        .title(" Ticker ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = input_block.inner(layout[0]);
    frame.render_widget(
        Paragraph::new(app.input.as_str()).block(input_block),
        layout[0],
    );

    if input_focused {
        let cursor = u16::try_from(app.input.cursor()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(cursor).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }

    let button_style = match (app.focus, app.is_searching()) {
        (Focus::FetchButton, _) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (Focus::Input, true) => Style::default().fg(Color::DarkGray),
        (Focus::Input, false) => Style::default().fg(Color::White),
    };
    frame.render_widget(
        Paragraph::new(BUTTON_LABEL)
            .style(button_style)
            .block(Block::default().borders(Borders::ALL)),
        layout[1],
    );
}
