//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// What to draw for a single input box
pub struct FieldView<'a> {
    pub label: &'a str,
    /// Text shown in the box (already masked for secrets)
    pub display: String,
    /// Shown dimmed when `display` is empty
    pub placeholder: &'a str,
    pub is_active: bool,
    pub is_enabled: bool,
    /// Selects show arrows instead of a text cursor when focused
    pub is_select: bool,
    /// Annotation after the value, e.g. a stale selection warning
    pub note: Option<String>,
}

impl<'a> FieldView<'a> {
    pub fn text(label: &'a str, display: String, is_active: bool) -> Self {
        Self {
            label,
            display,
            placeholder: "",
            is_active,
            is_enabled: true,
            is_select: false,
            note: None,
        }
    }
}

/// Split a field cell into the input box and the error line
pub fn split_cell(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw an input box
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let border_style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if !field.is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    if field.is_select && field.is_active && field.is_enabled {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }
    if field.display.is_empty() {
        spans.push(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(field.display, value_style));
    }
    if field.is_active {
        let marker = if field.is_select { " ▶" } else { "▌" };
        spans.push(Span::styled(marker, Style::default().fg(Color::Cyan)));
    }
    if let Some(note) = field.note {
        spans.push(Span::styled(
            format!(" {note}"),
            Style::default().fg(Color::Yellow),
        ));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a field's error message; nothing when it has none
pub fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let error = Paragraph::new(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(error, area);
}

/// Mask a secret value, one bullet per character
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

/// Draw a help line of key/description pairs
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {desc}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
