//! Signup form state and its event transitions

use super::field::{Field, FieldKind, FormData};
use super::validation::{validate_field, validate_form, ErrorMap};
use crate::navigation::{Navigator, View};
use crate::state::CountryCityTable;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Something on the form that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSlot {
    Input(Field),
    ShowPassword,
    Submit,
}

/// Focus order, matching the on-screen layout
pub const FOCUS_ORDER: [FocusSlot; 13] = [
    FocusSlot::Input(Field::FirstName),
    FocusSlot::Input(Field::LastName),
    FocusSlot::Input(Field::Username),
    FocusSlot::Input(Field::Email),
    FocusSlot::Input(Field::Pan),
    FocusSlot::Input(Field::Aadhar),
    FocusSlot::Input(Field::Password),
    FocusSlot::ShowPassword,
    FocusSlot::Input(Field::PhoneCode),
    FocusSlot::Input(Field::PhoneNumber),
    FocusSlot::Input(Field::Country),
    FocusSlot::Input(Field::City),
    FocusSlot::Submit,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
}

/// Holds the signup values and their validation errors
#[derive(Debug, Clone)]
pub struct SignupForm {
    data: FormData,
    errors: ErrorMap,
    status: FormStatus,
    table: CountryCityTable,
    active_field_index: usize,
}

impl SignupForm {
    pub fn new(table: CountryCityTable) -> Self {
        Self {
            data: FormData::default(),
            errors: ErrorMap::default(),
            status: FormStatus::Editing,
            table,
            active_field_index: 0,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn table(&self) -> &CountryCityTable {
        &self.table
    }

    /// Store a new value and re-validate that field only.
    ///
    /// A country change leaves the chosen city in place.
    pub fn on_field_change(&mut self, field: Field, value: String) {
        let result = validate_field(field, &value);
        self.data.set(field, value);
        self.errors.record(field, result);
    }

    pub fn on_field_blur(&mut self, field: Field) {
        let result = validate_field(field, self.data.get(field));
        self.errors.record(field, result);
    }

    /// Validate everything and hand a snapshot to `navigator` when it passes.
    ///
    /// Returns whether navigation happened.
    pub fn on_submit(&mut self, navigator: &mut dyn Navigator) -> bool {
        self.errors = validate_form(&self.data);
        if !self.errors.is_empty() {
            for (_, err) in self.errors.iter() {
                tracing::debug!(field = %err.field(), kind = ?err.kind(), "{err}");
            }
            tracing::debug!("Submit blocked by {} field error(s)", self.errors.len());
            return false;
        }

        self.status = FormStatus::Submitted;
        tracing::info!("Signup form submitted for {}", self.data.username);
        navigator.navigate_to(View::Success, self.data.clone());
        true
    }

    /// Advisory flag for the submit control, computed from current state
    pub fn is_submit_enabled(&self) -> bool {
        self.errors.is_empty() && self.data.is_complete()
    }

    pub fn toggle_show_password(&mut self) {
        self.data.show_password = !self.data.show_password;
    }

    pub fn country_options(&self) -> impl Iterator<Item = &str> {
        self.table.countries()
    }

    pub fn city_options(&self) -> &[String] {
        self.table.cities(&self.data.country)
    }

    /// True when the chosen city is not offered for the chosen country
    pub fn is_city_stale(&self) -> bool {
        !self.data.city.is_empty() && !self.table.contains_city(&self.data.country, &self.data.city)
    }

    pub fn active_slot(&self) -> FocusSlot {
        FOCUS_ORDER[self.active_field_index]
    }

    /// Field under focus when it accepts typed text
    fn active_text_field(&self) -> Option<Field> {
        match self.active_slot() {
            FocusSlot::Input(field) if field.kind() != FieldKind::Select => Some(field),
            _ => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_text_field() {
            let mut value = self.data.get(field).to_string();
            value.push(c);
            self.on_field_change(field, value);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_text_field() {
            let mut value = self.data.get(field).to_string();
            if value.pop().is_some() {
                self.on_field_change(field, value);
            }
        }
    }

    pub fn select_next_option(&mut self) {
        self.cycle_option(true);
    }

    pub fn select_prev_option(&mut self) {
        self.cycle_option(false);
    }

    /// Step a select through its placeholder and options
    fn cycle_option(&mut self, forward: bool) {
        let field = match self.active_slot() {
            FocusSlot::Input(field) if field.kind() == FieldKind::Select => field,
            _ => return,
        };
        let options: Vec<String> = match field {
            Field::Country => self.country_options().map(str::to_string).collect(),
            _ => self.city_options().to_vec(),
        };
        // City stays disabled until a country is chosen
        if options.is_empty() {
            return;
        }

        let last = options.len() - 1;
        let current = options.iter().position(|o| o == self.data.get(field));
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => Some(last),
            (Some(i), true) if i < last => Some(i + 1),
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
            (Some(_), true) => None,
        };

        let value = next.map(|i| options[i].clone()).unwrap_or_default();
        self.on_field_change(field, value);
    }

    /// Start over with an empty form, keeping the reference data
    pub fn reset(&mut self) {
        self.data = FormData::default();
        self.errors = ErrorMap::default();
        self.status = FormStatus::Editing;
        self.active_field_index = 0;
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        FOCUS_ORDER.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    /// Move focus, validating the input being left
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(FOCUS_ORDER.len() - 1);
        if index == self.active_field_index {
            return;
        }
        if let FocusSlot::Input(field) = self.active_slot() {
            self.on_field_blur(field);
        }
        self.active_field_index = index;
    }
}
