use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::form::FormKind;

pub static DEFAULT_CONFIG: Lazy<Arc<MockConfig>> = Lazy::new(|| Arc::new(MockConfig::default()));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetMode {
    /// Only the demo account receives a reset link.
    #[default]
    Strict,
    /// Any non-empty address is accepted.
    AcceptAny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    pub login_ms: u32,
    pub signup_ms: u32,
    pub password_reset_ms: u32,
    pub password_reset_any_ms: u32,
    pub password_change_ms: u32,
    pub blog_create_ms: u32,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            login_ms: 1200,
            signup_ms: 1500,
            password_reset_ms: 1200,
            password_reset_any_ms: 1000,
            password_change_ms: 1200,
            blog_create_ms: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    pub demo_email: String,
    pub demo_password: String,
    /// Signing up with this address reports a duplicate account.
    pub existing_email: String,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            demo_email: "test@example.com".to_string(),
            demo_password: "password".to_string(),
            existing_email: "existing@example.com".to_string(),
        }
    }
}

/// Knobs for the simulated backend. Every field may be omitted in overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub delays: DelayConfig,
    pub credentials: CredentialConfig,
    pub reset_mode: ResetMode,
    pub shake_ms: u32,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            delays: DelayConfig::default(),
            credentials: CredentialConfig::default(),
            reset_mode: ResetMode::default(),
            shake_ms: 500,
        }
    }
}

impl MockConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn delay_for(&self, kind: FormKind) -> u32 {
        match kind {
            FormKind::Login => self.delays.login_ms,
            FormKind::Signup => self.delays.signup_ms,
            FormKind::PasswordReset => match self.reset_mode {
                ResetMode::Strict => self.delays.password_reset_ms,
                ResetMode::AcceptAny => self.delays.password_reset_any_ms,
            },
            FormKind::PasswordChange => self.delays.password_change_ms,
            FormKind::BlogCreate => self.delays.blog_create_ms,
        }
    }
}

/// Parses an optional override, falling back to the defaults on absence or error.
pub fn load_or_default(raw: Option<&str>) -> Arc<MockConfig> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return DEFAULT_CONFIG.clone();
    };

    match MockConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("Loaded mock config override: {:?}", config);
            Arc::new(config)
        }
        Err(e) => {
            log::warn!("Ignoring invalid mock config: {}", e);
            DEFAULT_CONFIG.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = MockConfig::from_json(
            r#"{ "delays": { "login_ms": 10 }, "reset_mode": "accept_any" }"#,
        )
        .unwrap();

        assert_eq!(config.delays.login_ms, 10);
        assert_eq!(config.delays.signup_ms, 1500);
        assert_eq!(config.reset_mode, ResetMode::AcceptAny);
        assert_eq!(config.credentials, CredentialConfig::default());
        assert_eq!(config.shake_ms, 500);
    }

    #[test]
    fn reset_delay_follows_mode() {
        let mut config = MockConfig::default();
        assert_eq!(config.delay_for(FormKind::PasswordReset), 1200);
        config.reset_mode = ResetMode::AcceptAny;
        assert_eq!(config.delay_for(FormKind::PasswordReset), 1000);
    }

    #[test_log::test]
    fn invalid_override_falls_back_to_defaults() {
        let config = load_or_default(Some("{ not json"));
        assert_eq!(*config, MockConfig::default());
    }

    #[test]
    fn blank_override_uses_defaults() {
        assert_eq!(*load_or_default(Some("  ")), MockConfig::default());
        assert_eq!(*load_or_default(None), MockConfig::default());
    }
}
