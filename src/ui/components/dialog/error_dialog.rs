//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Title for the dialog, counting errors still queued behind this one
fn error_title(queued: usize) -> String {
    match queued {
        0 => "Error".to_string(),
        n => format!("Error ({n} more)"),
    }
}

/// Render the front error of the queue as a centered overlay
pub fn render_error_dialog(frame: &mut Frame, message: &str, queued: usize) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let title = error_title(queued);

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            color: Color::Red,
            message,
            hint: Some(vec![
                Span::raw("Press "),
                Span::styled("Enter", key),
                Span::raw(" or "),
                Span::styled("Esc", key),
                Span::raw(" to dismiss"),
            ]),
            max_width: 60,
        },
    );
}
