use std::fmt;

use crate::field::{Field, FormValues, ValidationErrors};
use crate::validation::{self, Validator};

/// The forms the site knows how to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Signup,
    PasswordReset,
    PasswordChange,
    BlogCreate,
}

impl FormKind {
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormKind::Login => &[Field::Email, Field::Password],
            FormKind::Signup => &[Field::Name, Field::Email, Field::Password, Field::ConfirmPassword],
            FormKind::PasswordReset => &[Field::Email],
            FormKind::PasswordChange => &[Field::CurrentPassword, Field::NewPassword],
            FormKind::BlogCreate => &[Field::Title, Field::Content],
        }
    }

    pub fn validator(&self) -> Validator {
        match self {
            FormKind::Login => validation::validate_login,
            FormKind::Signup => validation::validate_signup,
            FormKind::PasswordReset => validation::validate_password_reset,
            FormKind::PasswordChange => validation::validate_password_change,
            FormKind::BlogCreate => validation::validate_blog_create,
        }
    }

    pub fn validate(&self, values: &FormValues) -> ValidationErrors {
        (self.validator())(values)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormKind::Login => "login",
            FormKind::Signup => "signup",
            FormKind::PasswordReset => "password-reset",
            FormKind::PasswordChange => "password-change",
            FormKind::BlogCreate => "blog-create",
        };
        f.write_str(name)
    }
}
