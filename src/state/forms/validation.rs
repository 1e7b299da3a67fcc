//! Per-field and whole-form validation rules

use super::field::{Field, FormData};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_CODE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[0-9]{1,4}$").unwrap());

static PHONE_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{7,12}$").unwrap());

static PAN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());

static AADHAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

const MIN_PASSWORD_LEN: usize = 6;

/// A user-input failure on a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("*{} is required", .field.required_name())]
    Required { field: Field },
    #[error("{message}")]
    Format { field: Field, message: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    Format,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required { field } | Self::Format { field, .. } => *field,
        }
    }

    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::Required { .. } => ViolationKind::Required,
            Self::Format { .. } => ViolationKind::Format,
        }
    }
}

fn required(field: Field, present: bool) -> Result<(), ValidationError> {
    if present {
        Ok(())
    } else {
        Err(ValidationError::Required { field })
    }
}

fn check_format(field: Field, ok: bool, message: &'static str) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::Format { field, message })
    }
}

/// Validate one field value. The first failing rule wins.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    let filled = !value.trim().is_empty();
    match field {
        Field::FirstName | Field::LastName | Field::Username => required(field, filled),
        Field::Email => {
            required(field, filled)?;
            check_format(field, EMAIL_PATTERN.is_match(value), "*Invalid email address")
        }
        // Password and the selects check the raw value, so whitespace counts
        Field::Password => {
            required(field, !value.is_empty())?;
            check_format(
                field,
                value.chars().count() >= MIN_PASSWORD_LEN,
                "*Password must be at least 6 characters",
            )
        }
        Field::PhoneCode => {
            required(field, filled)?;
            check_format(
                field,
                PHONE_CODE_PATTERN.is_match(value),
                "*Phone code must be like +91 or +1",
            )
        }
        Field::PhoneNumber => {
            required(field, filled)?;
            check_format(
                field,
                PHONE_NUMBER_PATTERN.is_match(value),
                "*Phone number must be 7-12 digits",
            )
        }
        Field::Country | Field::City => required(field, !value.is_empty()),
        Field::Pan => {
            required(field, filled)?;
            check_format(
                field,
                PAN_PATTERN.is_match(value),
                "*Invalid PAN format (e.g., ABCDE1234F)",
            )
        }
        Field::Aadhar => {
            required(field, filled)?;
            check_format(
                field,
                AADHAR_PATTERN.is_match(value),
                "*Aadhar must be a 12-digit number",
            )
        }
    }
}

/// Outstanding validation errors keyed by field. Absent means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<Field, ValidationError>,
}

impl ErrorMap {
    /// Store the outcome of validating `field`, clearing any earlier error
    pub fn record(&mut self, field: Field, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Message for `field`, or an empty string when it has no error
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &ValidationError)> {
        self.errors.iter()
    }
}

/// Validate every field of `data` without stopping at the first failure
pub fn validate_form(data: &FormData) -> ErrorMap {
    let mut errors = ErrorMap::default();
    for field in Field::ALL {
        errors.record(field, validate_field(field, data.get(field)));
    }
    errors
}

#[cfg(test)]
pub(crate) fn valid_form_data() -> FormData {
    FormData {
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        username: "asha.rao".to_string(),
        email: "asha@example.com".to_string(),
        password: "s3cret!".to_string(),
        show_password: false,
        phone_code: "+91".to_string(),
        phone_number: "9876543210".to_string(),
        country: "India".to_string(),
        city: "Pune".to_string(),
        pan: "ABCDE1234F".to_string(),
        aadhar: "123456789012".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(field: Field, value: &str) -> String {
        match validate_field(field, value) {
            Ok(()) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    mod required_rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_messages() {
            let expected = [
                (Field::FirstName, "*First Name is required"),
                (Field::LastName, "*Last Name is required"),
                (Field::Username, "*Username is required"),
                (Field::Email, "*Email is required"),
                (Field::Password, "*Password is required"),
                (Field::PhoneCode, "*Phone code is required"),
                (Field::PhoneNumber, "*Phone number is required"),
                (Field::Country, "*Country is required"),
                (Field::City, "*City is required"),
                (Field::Pan, "*PAN number is required"),
                (Field::Aadhar, "*Aadhar number is required"),
            ];
            for (field, msg) in expected {
                assert_eq!(message(field, ""), msg);
            }
        }

        #[test]
        fn test_empty_never_reports_format() {
            for field in Field::ALL {
                let err = validate_field(field, "").unwrap_err();
                assert_eq!(err.kind(), ViolationKind::Required);
                assert_eq!(err.field(), field);
            }
        }

        #[test]
        fn test_blank_is_required_for_trimmed_fields() {
            for field in [
                Field::FirstName,
                Field::LastName,
                Field::Username,
                Field::Email,
                Field::PhoneCode,
                Field::PhoneNumber,
                Field::Pan,
                Field::Aadhar,
            ] {
                let err = validate_field(field, "   ").unwrap_err();
                assert_eq!(err.kind(), ViolationKind::Required, "{field}");
            }
        }

        #[test]
        fn test_blank_password_is_a_length_problem() {
            assert_eq!(
                message(Field::Password, "   "),
                "*Password must be at least 6 characters"
            );
        }

        #[test]
        fn test_name_fields_accept_anything_non_blank() {
            assert!(validate_field(Field::FirstName, "a").is_ok());
            assert!(validate_field(Field::Username, " x ").is_ok());
        }
    }

    mod format_rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_email() {
            assert_eq!(message(Field::Email, "a@b"), "*Invalid email address");
            assert_eq!(message(Field::Email, "a@b.com"), "");
            assert_eq!(message(Field::Email, "a b@c.com"), "*Invalid email address");
            assert_eq!(message(Field::Email, "a@@b.com"), "*Invalid email address");
        }

        #[test]
        fn test_password_length() {
            assert_eq!(
                message(Field::Password, "abcde"),
                "*Password must be at least 6 characters"
            );
            assert_eq!(message(Field::Password, "abcdef"), "");
        }

        #[test]
        fn test_pan() {
            assert_eq!(message(Field::Pan, "ABCDE1234F"), "");
            assert_eq!(
                message(Field::Pan, "abcde1234f"),
                "*Invalid PAN format (e.g., ABCDE1234F)"
            );
            assert_eq!(
                message(Field::Pan, "ABCDE12345"),
                "*Invalid PAN format (e.g., ABCDE1234F)"
            );
        }

        #[test]
        fn test_aadhar() {
            assert_eq!(message(Field::Aadhar, "123456789012"), "");
            assert_eq!(
                message(Field::Aadhar, "12345678901"),
                "*Aadhar must be a 12-digit number"
            );
        }

        #[test]
        fn test_phone_code() {
            assert_eq!(message(Field::PhoneCode, "+91"), "");
            assert_eq!(message(Field::PhoneCode, "+1"), "");
            assert_eq!(
                message(Field::PhoneCode, "91"),
                "*Phone code must be like +91 or +1"
            );
            assert_eq!(
                message(Field::PhoneCode, "+12345"),
                "*Phone code must be like +91 or +1"
            );
        }

        #[test]
        fn test_phone_number() {
            assert_eq!(message(Field::PhoneNumber, "1234567"), "");
            assert_eq!(message(Field::PhoneNumber, "123456789012"), "");
            assert_eq!(
                message(Field::PhoneNumber, "123456"),
                "*Phone number must be 7-12 digits"
            );
            assert_eq!(
                message(Field::PhoneNumber, "1234567890123"),
                "*Phone number must be 7-12 digits"
            );
        }

        #[test]
        fn test_digits_are_ascii_only() {
            // Arabic-Indic digits
            assert!(validate_field(Field::PhoneNumber, "١٢٣٤٥٦٧").is_err());
        }

        #[test]
        fn test_format_kind() {
            let err = validate_field(Field::Email, "nope").unwrap_err();
            assert_eq!(err.kind(), ViolationKind::Format);
            assert_eq!(err.field(), Field::Email);
        }
    }

    mod whole_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_empty_reports_every_field() {
            let errors = validate_form(&FormData::default());
            assert_eq!(errors.len(), 11);
            for (field, err) in errors.iter() {
                assert_eq!(err.kind(), ViolationKind::Required, "{field}");
            }
        }

        #[test]
        fn test_valid_form_has_no_errors() {
            assert!(validate_form(&valid_form_data()).is_empty());
        }

        #[test]
        fn test_no_early_exit() {
            let mut data = valid_form_data();
            data.email = "bad".to_string();
            data.pan = String::new();
            data.aadhar = "1".to_string();
            let errors = validate_form(&data);
            assert_eq!(errors.len(), 3);
            assert_eq!(errors.message(Field::Email), "*Invalid email address");
            assert_eq!(errors.message(Field::Pan), "*PAN number is required");
            assert_eq!(
                errors.message(Field::Aadhar),
                "*Aadhar must be a 12-digit number"
            );
            assert_eq!(errors.message(Field::City), "");
        }

        #[test]
        fn test_record_clears_previous_error() {
            let mut errors = ErrorMap::default();
            errors.record(Field::Email, validate_field(Field::Email, ""));
            assert_eq!(errors.len(), 1);
            errors.record(Field::Email, validate_field(Field::Email, "a@b.co"));
            assert!(errors.is_empty());
        }
    }
}
