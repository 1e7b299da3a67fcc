//! Signup form fields and the data they hold

use serde::{Deserialize, Serialize};
use std::fmt;

/// One validated input of the signup form.
///
/// `show_password` is a display toggle and deliberately has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneCode,
    PhoneNumber,
    Country,
    City,
    Pan,
    Aadhar,
}

/// How a field accepts input in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Select,
}

impl Field {
    /// All validated fields, in whole-form validation order
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::PhoneCode,
        Field::PhoneNumber,
        Field::Country,
        Field::City,
        Field::Pan,
        Field::Aadhar,
    ];

    /// Field key as it appears in the submitted payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::PhoneCode => "phoneCode",
            Self::PhoneNumber => "phoneNumber",
            Self::Country => "country",
            Self::City => "city",
            Self::Pan => "pan",
            Self::Aadhar => "aadhar",
        }
    }

    /// Label shown on the field's border
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::PhoneCode => "Code",
            Self::PhoneNumber => "Number",
            Self::Country => "Country",
            Self::City => "City",
            Self::Pan => "PAN Number",
            Self::Aadhar => "Aadhar Number",
        }
    }

    /// Name used in the required-field message
    pub fn required_name(&self) -> &'static str {
        match self {
            Self::PhoneCode => "Phone code",
            Self::PhoneNumber => "Phone number",
            Self::Pan => "PAN number",
            Self::Aadhar => "Aadhar number",
            other => other.label(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Password => FieldKind::Secret,
            Self::Country | Self::City => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values collected by the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub phone_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan: String,
    pub aadhar: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PhoneCode => &self.phone_code,
            Field::PhoneNumber => &self.phone_number,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::Pan => &self.pan,
            Field::Aadhar => &self.aadhar,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PhoneCode => &mut self.phone_code,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::Pan => &mut self.pan,
            Field::Aadhar => &mut self.aadhar,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.get_mut(field) = value;
    }

    /// True when every validated field holds a value
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).is_empty())
    }
}
