use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{MockConfig, ResetMode};
use crate::error::{Result, SubmissionError};
use crate::field::{Field, FormValues};
use crate::form::FormKind;
use crate::validation::{text_len, MIN_PASSWORD_LEN};

/// Source of delays. The browser apps use `setTimeout`, tests use a paused tokio clock.
#[async_trait(?Send)]
pub trait Clock {
    async fn sleep(&self, ms: u32);
}

/// Sends a validated form somewhere and reports the message to show on success.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, values: &FormValues) -> Result<String>;
}

/// Stand-in for a backend: waits a fixed delay, then answers from hard-coded rules.
pub struct MockTransport {
    kind: FormKind,
    config: Arc<MockConfig>,
    clock: Arc<dyn Clock>,
}

impl MockTransport {
    pub fn new(kind: FormKind, config: Arc<MockConfig>, clock: Arc<dyn Clock>) -> Self {
        Self { kind, config, clock }
    }

    pub fn delay_ms(&self) -> u32 {
        self.config.delay_for(self.kind)
    }

    pub fn resolve(&self, values: &FormValues) -> Result<String> {
        resolve(self.kind, values, &self.config)
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, values: &FormValues) -> Result<String> {
        let delay = self.delay_ms();
        log::debug!("Simulating {} request ({} ms)", self.kind, delay);
        self.clock.sleep(delay).await;
        self.resolve(values)
    }
}

fn answer(ok: bool, success: &str, failure: &str) -> Result<String> {
    if ok {
        Ok(success.to_string())
    } else {
        Err(SubmissionError::Rejected(failure.to_string()))
    }
}

/// The outcome a mock request resolves to, without the delay.
pub fn resolve(kind: FormKind, values: &FormValues, config: &MockConfig) -> Result<String> {
    let credentials = &config.credentials;
    match kind {
        FormKind::Login => answer(
            values.get(Field::Email) == credentials.demo_email
                && values.get(Field::Password) == credentials.demo_password,
            "Login successful! Redirecting to dashboard...",
            "Invalid email or password.",
        ),
        FormKind::Signup => answer(
            values.get(Field::Email) != credentials.existing_email,
            "Account created successfully! Redirecting to login...",
            "An account with this email already exists.",
        ),
        FormKind::PasswordReset => {
            let email = values.get(Field::Email);
            let known = match config.reset_mode {
                ResetMode::Strict => email == credentials.demo_email,
                ResetMode::AcceptAny => !email.trim().is_empty(),
            };
            answer(
                known,
                "Password reset link sent to your email!",
                "No account found with this email.",
            )
        }
        FormKind::PasswordChange => answer(
            values.get(Field::CurrentPassword) == credentials.demo_password
                && text_len(values.get(Field::NewPassword)) >= MIN_PASSWORD_LEN,
            "Password changed successfully!",
            "Current password is incorrect or new password is too short.",
        ),
        FormKind::BlogCreate => Ok("Blog post created!".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> FormValues {
        FormValues::new()
            .with(Field::Email, email)
            .with(Field::Password, password)
    }

    #[test]
    fn login_needs_both_demo_credentials() {
        let config = MockConfig::default();
        assert!(resolve(FormKind::Login, &login("test@example.com", "password"), &config).is_ok());
        assert_eq!(
            resolve(FormKind::Login, &login("test@example.com", "Password"), &config),
            Err(SubmissionError::Rejected("Invalid email or password.".to_string()))
        );
    }

    #[test]
    fn reset_mode_changes_who_gets_a_link() {
        let mut config = MockConfig::default();
        let stranger = FormValues::new().with(Field::Email, "someone@else.org");
        assert!(resolve(FormKind::PasswordReset, &stranger, &config).is_err());

        config.reset_mode = ResetMode::AcceptAny;
        assert!(resolve(FormKind::PasswordReset, &stranger, &config).is_ok());
        assert!(resolve(FormKind::PasswordReset, &FormValues::new(), &config).is_err());
    }

    #[test]
    fn overridden_credentials_are_honoured() {
        let mut config = MockConfig::default();
        config.credentials.demo_password = "letmein99".to_string();
        let values = FormValues::new()
            .with(Field::CurrentPassword, "letmein99")
            .with(Field::NewPassword, "brand-new-pass");
        assert_eq!(
            resolve(FormKind::PasswordChange, &values, &config).as_deref(),
            Ok("Password changed successfully!")
        );
    }

    #[test]
    fn new_password_length_counts_utf16_units() {
        let config = MockConfig::default();
        let change = |new: &str| {
            FormValues::new()
                .with(Field::CurrentPassword, "password")
                .with(Field::NewPassword, new)
        };
        assert!(resolve(FormKind::PasswordChange, &change("😀😀😀😀"), &config).is_ok());
        assert!(resolve(FormKind::PasswordChange, &change("😀😀😀"), &config).is_err());
    }

    #[test]
    fn rejection_message_is_the_display_text() {
        let err = resolve(
            FormKind::Signup,
            &FormValues::new().with(Field::Email, "existing@example.com"),
            &MockConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "An account with this email already exists.");
    }
}
