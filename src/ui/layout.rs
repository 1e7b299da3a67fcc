//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::FormStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.state.current_view();
    let mut spans = vec![Span::styled(
        format!(" {} ", view.route()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    let form = &app.state.form;
    let (symbol, color) = match form.status() {
        FormStatus::Submitted => (" ✓ submitted", Color::Green),
        FormStatus::Editing if form.is_submit_enabled() => (" ● ready", Color::Green),
        FormStatus::Editing => (" ○ incomplete", Color::Yellow),
    };
    spans.push(Span::styled(symbol, Style::default().fg(color)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
