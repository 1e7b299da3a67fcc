//! Confirmation view shown after a successful submit

use super::forms::draw_help_text;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the submitted data verbatim
///
/// Stores the scroll offset back after clamping it to the payload.
pub fn draw(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(3),    // Payload
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, area);

    let received = app
        .state
        .router
        .state()
        .map(|s| s.received_at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Form Submission Successful 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Submitted at {received}"),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(heading, chunks[0]);

    let json = app.submission_json().unwrap_or_default();
    let lines: Vec<Line> = json.lines().map(|l| Line::from(l.to_string())).collect();
    // Borders take two rows
    let visible = chunks[1].height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    app.state.scroll_offset = app.state.scroll_offset.min(max_scroll);
    let scroll = app.state.scroll_offset as u16;

    let payload = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((scroll, 0));
    frame.render_widget(payload, chunks[1]);

    draw_help_text(
        frame,
        chunks[2],
        &[
            ("j/k", "scroll"),
            ("y", "copy"),
            ("n", "new signup"),
            ("q", "quit"),
        ],
    );
}
