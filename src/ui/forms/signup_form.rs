//! Signup form rendering

use super::field_renderer::{
    draw_error, draw_field, draw_help_text, mask, split_cell, FieldView, FIELD_HEIGHT,
};
use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, TOGGLE_PASSWORD_SHORTCUT};
use crate::state::{Field, FieldKind, FocusSlot, SignupForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const LEFT_COLUMN: [Field; 5] = [
    Field::FirstName,
    Field::LastName,
    Field::Username,
    Field::Email,
    Field::Pan,
];

/// Draw the signup form
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" SignUp Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT * 5), // Field columns
            Constraint::Length(BUTTON_HEIGHT),    // Submit
            Constraint::Length(1),                // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(1)
        .split(chunks[0]);

    let left = rows(columns[0]);
    for (field, cell) in LEFT_COLUMN.iter().zip(left.iter()) {
        draw_input_cell(frame, *cell, form, *field);
    }

    let right = rows(columns[1]);
    draw_input_cell(frame, right[0], form, Field::Aadhar);
    draw_password_cell(frame, right[1], form);
    draw_phone_cell(frame, right[2], form);
    draw_input_cell(frame, right[3], form, Field::Country);
    draw_input_cell(frame, right[4], form, Field::City);

    let [submit_area] = Layout::horizontal([Constraint::Length(14)])
        .flex(Flex::Center)
        .areas(chunks[1]);
    render_button(
        frame,
        submit_area,
        "Submit",
        form.active_slot() == FocusSlot::Submit,
        form.is_submit_enabled(),
    );

    draw_help_text(
        frame,
        chunks[2],
        &[
            ("Tab", "next"),
            ("←/→", "choose"),
            (SUBMIT_SHORTCUT, "submit"),
            (TOGGLE_PASSWORD_SHORTCUT, "show password"),
            ("Esc", "quit"),
        ],
    );
}

fn rows(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_HEIGHT); 5])
        .split(area)
        .to_vec()
}

/// Build the view for one input from current form state
fn input_view(form: &SignupForm, field: Field) -> FieldView<'static> {
    let data = form.data();
    let value = data.get(field);
    let display = match field.kind() {
        FieldKind::Secret if !data.show_password => mask(value),
        _ => value.to_string(),
    };
    let mut view = FieldView::text(
        field.label(),
        display,
        form.active_slot() == FocusSlot::Input(field),
    );
    view.is_select = field.kind() == FieldKind::Select;

    match field {
        Field::Country => view.placeholder = "-- Select Country --",
        Field::City => {
            view.placeholder = "-- Select City --";
            view.is_enabled = !data.country.is_empty();
            if form.is_city_stale() && !data.country.is_empty() {
                view.note = Some(format!("(not in {})", data.country));
            }
        }
        Field::PhoneCode => view.placeholder = "Code",
        Field::PhoneNumber => view.placeholder = "Number",
        _ => {}
    }
    view
}

fn draw_input_cell(frame: &mut Frame, area: Rect, form: &SignupForm, field: Field) {
    let (input_area, error_area) = split_cell(area);
    draw_field(frame, input_area, input_view(form, field));
    draw_error(frame, error_area, &form.errors().message(field));
}

fn draw_password_cell(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let (input_area, error_area) = split_cell(area);
    let [field_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(10)]).areas(input_area);

    draw_field(frame, field_area, input_view(form, Field::Password));
    let label = if form.data().show_password {
        "Hide"
    } else {
        "Show"
    };
    render_button(
        frame,
        button_area,
        label,
        form.active_slot() == FocusSlot::ShowPassword,
        true,
    );
    draw_error(frame, error_area, &form.errors().message(Field::Password));
}

/// Phone code and number share one row and one error line
fn draw_phone_cell(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let (input_area, error_area) = split_cell(area);
    let [code_area, number_area] =
        Layout::horizontal([Constraint::Length(10), Constraint::Min(10)]).areas(input_area);

    draw_field(frame, code_area, input_view(form, Field::PhoneCode));
    draw_field(frame, number_area, input_view(form, Field::PhoneNumber));

    let code_error = form.errors().message(Field::PhoneCode);
    let message = if code_error.is_empty() {
        form.errors().message(Field::PhoneNumber)
    } else {
        code_error
    };
    draw_error(frame, error_area, &message);
}
