use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::{Field, FormValues, ValidationErrors};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Maps a form's values to its per-field errors.
pub type Validator = fn(&FormValues) -> ValidationErrors;

/// Length as the browser reports it for an input value, in UTF-16 code units.
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn check_required(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}

pub fn check_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        Some("Name is required".to_string())
    } else if text_len(name) < MIN_NAME_LEN {
        Some(format!("Name must be at least {} characters", MIN_NAME_LEN))
    } else {
        None
    }
}

pub fn check_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(email) {
        Some("Please enter a valid email address".to_string())
    } else {
        None
    }
}

pub fn check_password(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if text_len(password) < MIN_PASSWORD_LEN {
        Some(format!("Password must be at least {} characters", MIN_PASSWORD_LEN))
    } else {
        None
    }
}

pub fn check_confirm_password(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        Some("Please confirm your password".to_string())
    } else if password != confirm {
        Some("Passwords do not match".to_string())
    } else {
        None
    }
}

fn collect(checks: impl IntoIterator<Item = (Field, Option<String>)>) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for (field, message) in checks {
        if let Some(message) = message {
            errors.insert(field, message);
        }
    }
    errors
}

pub fn validate_login(values: &FormValues) -> ValidationErrors {
    collect([
        (Field::Email, check_email(values.get(Field::Email))),
        (
            Field::Password,
            check_required(values.get(Field::Password), "Password is required"),
        ),
    ])
}

pub fn validate_signup(values: &FormValues) -> ValidationErrors {
    let password = values.get(Field::Password);
    collect([
        (Field::Name, check_name(values.get(Field::Name))),
        (Field::Email, check_email(values.get(Field::Email))),
        (Field::Password, check_password(password)),
        (
            Field::ConfirmPassword,
            check_confirm_password(password, values.get(Field::ConfirmPassword)),
        ),
    ])
}

pub fn validate_password_reset(values: &FormValues) -> ValidationErrors {
    collect([(Field::Email, check_email(values.get(Field::Email)))])
}

// Length of the new password is judged by the transport, not here.
pub fn validate_password_change(values: &FormValues) -> ValidationErrors {
    collect([
        (
            Field::CurrentPassword,
            check_required(values.get(Field::CurrentPassword), "Current password is required"),
        ),
        (
            Field::NewPassword,
            check_required(values.get(Field::NewPassword), "New password is required"),
        ),
    ])
}

pub fn validate_blog_create(values: &FormValues) -> ValidationErrors {
    collect([
        (Field::Title, check_required(values.get(Field::Title), "Title is required")),
        (Field::Content, check_required(values.get(Field::Content), "Content is required")),
    ])
}
