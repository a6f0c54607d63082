//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;
use crate::view::StatusKind;

/// Foreground colour for a status severity.
pub fn kind_color(kind: Option<StatusKind>) -> Color {
    match kind {
        Some(StatusKind::Success) => Color::Green,
        Some(StatusKind::Error) => Color::Red,
        Some(StatusKind::Warning) => Color::Yellow,
        Some(StatusKind::Loading) => Color::Cyan,
        Some(StatusKind::None) | None => Color::White,
    }
}

/// Renders the status bar. A hidden status slot leaves the line blank.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();

    if let Some(slot) = app.page.view.status.as_ref().filter(|s| s.visible) {
        let style = Style::default().fg(kind_color(slot.kind));
        if let Some(kind) = slot.kind {
            spans.push(Span::styled(
                format!(" {} ", kind.label().to_uppercase()),
                style.add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::styled(format!(" {} ", slot.text), style));
    }

    if app.searches_in_flight > 1 {
        spans.push(Span::styled(
            format!(" ({} searches running) ", app.searches_in_flight),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
