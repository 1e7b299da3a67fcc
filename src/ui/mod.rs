//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::App;
use crate::navigation::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view() {
        View::Signup => forms::draw_signup(frame, main_area, app),
        View::Success => success::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.error_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{valid_form_data, Field};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(app: &mut App) -> Buffer {
        render_sized(app, 100, 30)
    }

    fn render_sized(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn contains(buffer: &Buffer, needle: &str) -> bool {
        (0..buffer.area.height).any(|y| {
            let row: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.contains(needle)
        })
    }

    fn fill(app: &mut App) {
        let data = valid_form_data();
        for field in Field::ALL {
            app.state
                .form
                .on_field_change(field, data.get(field).to_string());
        }
    }

    #[test]
    fn test_signup_renders_labels_and_placeholders() {
        let mut app = App::new(&TuiConfig::default());
        let buffer = render(&mut app);
        assert!(contains(&buffer, "SignUp Form"));
        assert!(contains(&buffer, "First Name"));
        assert!(contains(&buffer, "Aadhar Number"));
        assert!(contains(&buffer, "-- Select Country --"));
        assert!(contains(&buffer, "Submit"));
    }

    #[test]
    fn test_signup_renders_errors_and_masks_password() {
        let mut app = App::new(&TuiConfig::default());
        app.state.form.on_field_change(Field::Email, "a@b".to_string());
        app.state
            .form
            .on_field_change(Field::Password, "hunter2".to_string());
        let buffer = render(&mut app);
        assert!(contains(&buffer, "*Invalid email address"));
        assert!(!contains(&buffer, "hunter2"));
        assert!(contains(&buffer, "•••••••"));
    }

    #[test]
    fn test_success_renders_payload() {
        let mut app = App::new(&TuiConfig::default());
        fill(&mut app);
        assert!(app.state.submit());
        let buffer = render(&mut app);
        assert!(contains(&buffer, "Form Submission Successful"));
        assert!(contains(&buffer, "\"firstName\": \"Asha\""));
        assert!(contains(&buffer, "/success"));
        assert!(contains(&buffer, "✓ submitted"));
    }

    #[test]
    fn test_error_dialog_overlays() {
        let mut app = App::new(&TuiConfig::default());
        app.push_error("country table is empty");
        let buffer = render(&mut app);
        assert!(contains(&buffer, "country table is empty"));
        assert!(contains(&buffer, "to dismiss"));
    }

    #[test]
    fn test_success_scrolls_to_last_payload_line() {
        let mut app = App::new(&TuiConfig::default());
        fill(&mut app);
        assert!(app.state.submit());
        for _ in 0..50 {
            app.state.scroll_down();
        }
        let buffer = render_sized(&mut app, 100, 14);
        assert!(contains(&buffer, "\"aadhar\": \"123456789012\""));
        assert!(!contains(&buffer, "\"firstName\""));

        // Offset is clamped, so one step up moves the view right away
        let bottom = app.state.scroll_offset;
        assert!(bottom > 0 && bottom < 50);
        app.state.scroll_up();
        render_sized(&mut app, 100, 14);
        assert_eq!(app.state.scroll_offset, bottom - 1);
    }

    #[test]
    fn test_error_dialog_counts_queued_errors() {
        let mut app = App::new(&TuiConfig::default());
        app.push_error("first");
        app.push_error("second");
        let buffer = render(&mut app);
        assert!(contains(&buffer, "Error (1 more)"));
        assert!(contains(&buffer, "to dismiss"));
    }

    #[test]
    fn test_city_note_hidden_without_country() {
        let mut app = App::new(&TuiConfig::default());
        app.state
            .form
            .on_field_change(Field::Country, "India".to_string());
        app.state.form.on_field_change(Field::City, "Pune".to_string());
        app.state
            .form
            .on_field_change(Field::Country, "Japan".to_string());
        assert!(contains(&render(&mut app), "(not in Japan)"));

        app.state.form.on_field_change(Field::Country, String::new());
        assert!(app.state.form.is_city_stale());
        assert!(!contains(&render(&mut app), "(not in"));
    }
}
