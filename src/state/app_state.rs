//! Application state definitions

use super::forms::SignupForm;
use super::reference::CountryCityTable;
use crate::navigation::{Router, View};
use std::collections::VecDeque;

/// Main application state
pub struct AppState {
    // Navigation
    pub router: Router,

    // Signup
    pub form: SignupForm,

    // UI state
    pub scroll_offset: usize,
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(table: CountryCityTable) -> Self {
        Self {
            router: Router::default(),
            form: SignupForm::new(table),
            scroll_offset: 0,
            status_message: None,
            errors: VecDeque::new(),
        }
    }

    pub fn current_view(&self) -> View {
        self.router.current()
    }

    /// Submit the form through the router
    pub fn submit(&mut self) -> bool {
        let submitted = self.form.on_submit(&mut self.router);
        if submitted {
            self.scroll_offset = 0;
        }
        submitted
    }

    /// Discard the submission and show a fresh form
    pub fn start_over(&mut self) {
        self.form.reset();
        self.router.reset();
        self.scroll_offset = 0;
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CountryCityTable::default())
    }
}
