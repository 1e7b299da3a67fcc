//! Application state and core logic

use crate::config::TuiConfig;
use crate::navigation::View;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::{AppState, CountryCityTable, Field, FocusSlot, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    ///
    /// A broken custom country table is reported in the error dialog and
    /// replaced by the built-in one.
    pub fn new(config: &TuiConfig) -> Self {
        let (table, load_error) = match config.country_table() {
            Ok(table) => (table, None),
            Err(err) => {
                tracing::warn!("Falling back to built-in country table: {err}");
                (CountryCityTable::default(), Some(err))
            }
        };
        let mut state = AppState::new(table);
        tracing::debug!("Loaded {} countries", state.form.table().len());
        if let Some(err) = load_error {
            state.push_error(format!("{err}\n\nUsing the built-in country list."));
        }

        Self { state, quit: false }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Submitted data as pretty-printed JSON, when on the success view
    pub fn submission_json(&self) -> Option<String> {
        let route = self.state.router.state()?;
        serde_json::to_string_pretty(&route.payload).ok()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view() {
            View::Signup => self.handle_signup_key(key),
            View::Success => self.handle_success_key(key)?,
        }
        Ok(())
    }

    /// Handle keys on the signup form
    fn handle_signup_key(&mut self, key: KeyEvent) {
        let slot = self.state.form.active_slot();
        let on_select = matches!(slot, FocusSlot::Input(Field::Country | Field::City));
        let shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SHORTCUT_MODIFIER);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Shortcut submit always re-validates, even with the button disabled
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('p') if shortcut => self.state.form.toggle_show_password(),
            KeyCode::Enter => match slot {
                FocusSlot::ShowPassword => self.state.form.toggle_show_password(),
                FocusSlot::Submit => {
                    if self.state.form.is_submit_enabled() {
                        self.submit();
                    }
                }
                FocusSlot::Input(_) => self.state.form.next_field(),
            },
            KeyCode::Right if on_select => self.state.form.select_next_option(),
            KeyCode::Left if on_select => self.state.form.select_prev_option(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) if !shortcut => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        if !self.state.submit() {
            let count = self.state.form.errors().len();
            self.state.status_message = Some(format!("{count} field(s) need attention"));
        }
    }

    /// Handle keys on the confirmation view
    fn handle_success_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('y') => {
                if let Err(err) = self.copy_submission() {
                    tracing::warn!("Clipboard copy failed: {err:?}");
                    self.push_error(format!("Failed to copy to clipboard: {err}"));
                }
            }
            KeyCode::Char('n') => self.state.start_over(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn copy_submission(&mut self) -> Result<()> {
        use arboard::Clipboard;
        let Some(json) = self.submission_json() else {
            return Ok(());
        };
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(json)?;
        self.state.status_message = Some("Copied submission to clipboard".to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{valid_form_data, FormData, FormStatus};
    use std::path::PathBuf;

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill(app: &mut App) {
        let data = valid_form_data();
        for field in Field::ALL {
            app.state
                .form
                .on_field_change(field, data.get(field).to_string());
        }
    }

    fn focus(app: &mut App, slot: FocusSlot) {
        while app.state.form.active_slot() != slot {
            press(app, KeyCode::Tab);
        }
    }

    mod startup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_app_starts_on_signup() {
            let app = app();
            assert!(!app.should_quit());
            assert_eq!(app.state.current_view(), View::Signup);
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_bad_cities_file_falls_back_with_error() {
            let config = TuiConfig {
                cities_file: Some(PathBuf::from("/nonexistent/cities.json")),
                ..Default::default()
            };
            let app = App::new(&config);
            assert!(app.state.has_errors());
            assert_eq!(app.state.form.table(), &CountryCityTable::default());
        }

        #[test]
        fn test_error_dialog_swallows_keys_until_dismissed() {
            let mut app = app();
            app.push_error("boom");
            press(&mut app, KeyCode::Char('a'));
            assert_eq!(app.state.form.data().first_name, "");
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.has_errors());
            assert!(!app.should_quit());
        }
    }

    mod signup_keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = app();
            type_str(&mut app, "Asha");
            assert_eq!(app.state.form.data().first_name, "Asha");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.form.data().first_name, "Ash");
        }

        #[test]
        fn test_tab_blurs_and_moves() {
            let mut app = app();
            press(&mut app, KeyCode::Tab);
            assert_eq!(
                app.state.form.active_slot(),
                FocusSlot::Input(Field::LastName)
            );
            assert_eq!(
                app.state.form.errors().message(Field::FirstName),
                "*First Name is required"
            );
        }

        #[test]
        fn test_enter_on_input_moves_to_next() {
            let mut app = app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.active_field(), 1);
        }

        #[test]
        fn test_arrows_cycle_country() {
            let mut app = app();
            focus(&mut app, FocusSlot::Input(Field::Country));
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.form.data().country, "Canada");
            press(&mut app, KeyCode::Left);
            assert_eq!(app.state.form.data().country, "India");
        }

        #[test]
        fn test_show_password_toggles() {
            let mut app = app();
            focus(&mut app, FocusSlot::ShowPassword);
            press(&mut app, KeyCode::Enter);
            assert!(app.state.form.data().show_password);
            ctrl(&mut app, 'p');
            assert!(!app.state.form.data().show_password);
        }

        #[test]
        fn test_enter_on_disabled_submit_does_nothing() {
            let mut app = app();
            focus(&mut app, FocusSlot::Submit);
            let errors_before = app.state.form.errors().len();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view(), View::Signup);
            assert_eq!(app.state.form.errors().len(), errors_before);
        }

        #[test]
        fn test_ctrl_s_shows_all_errors() {
            let mut app = app();
            ctrl(&mut app, 's');
            assert_eq!(app.state.form.errors().len(), 11);
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("11 field(s) need attention")
            );
            assert_eq!(app.state.form.data().username, "");
        }

        #[test]
        fn test_enter_on_enabled_submit_navigates() {
            let mut app = app();
            fill(&mut app);
            focus(&mut app, FocusSlot::Submit);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view(), View::Success);
            assert_eq!(app.state.form.status(), FormStatus::Submitted);
        }

        #[test]
        fn test_esc_quits() {
            let mut app = app();
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }
    }

    mod success_keys {
        use super::*;
        use pretty_assertions::assert_eq;

        fn submitted() -> App {
            let mut app = app();
            fill(&mut app);
            ctrl(&mut app, 's');
            app
        }

        #[test]
        fn test_submission_json_echoes_payload() {
            let app = submitted();
            let json = app.submission_json().unwrap();
            let parsed: FormData = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, valid_form_data());
            assert!(json.contains("\"firstName\": \"Asha\""));
        }

        #[test]
        fn test_no_submission_json_before_submit() {
            assert!(app().submission_json().is_none());
        }

        #[test]
        fn test_scroll_keys() {
            let mut app = submitted();
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Char('j'));
            press(&mut app, KeyCode::Char('k'));
            assert_eq!(app.state.scroll_offset, 1);
        }

        #[test]
        fn test_n_starts_over() {
            let mut app = submitted();
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state.current_view(), View::Signup);
            assert_eq!(app.state.form.status(), FormStatus::Editing);
            assert_eq!(app.state.form.data().first_name, "");
        }

        #[test]
        fn test_q_quits() {
            let mut app = submitted();
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }
    }
}
