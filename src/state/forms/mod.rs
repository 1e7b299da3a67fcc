//! Form domain layer
//!
//! Field definitions, the validation rules and the signup form controller.

mod field;
mod form_state;
mod validation;

pub use field::{Field, FieldKind, FormData};
pub use form_state::{FocusSlot, Form, FormStatus, SignupForm};

#[cfg(test)]
pub(crate) use validation::valid_form_data;
