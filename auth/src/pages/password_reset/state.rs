use std::sync::Arc;

use ck_blogsite_core::{Field, FormKind, FormSubmission, SubmissionState};
use futures_signals::signal::Signal;

use crate::app::App;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetStage {
    Request,
    Sent,
}

impl ResetStage {
    pub fn of(state: &SubmissionState) -> Self {
        match state {
            SubmissionState::Success(_) => ResetStage::Sent,
            _ => ResetStage::Request,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResetStage::Request => "Reset Password",
            ResetStage::Sent => "Check your email",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResetStage::Request => "Enter your email and we'll send you a reset link",
            ResetStage::Sent => "Follow the link in the message to choose a new password.",
        }
    }
}

pub struct ResetState {
    pub app: Arc<App>,
    pub form: Arc<FormSubmission>,
}

impl ResetState {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            form: app.mock_form(FormKind::PasswordReset),
            app,
        })
    }

    pub fn stage_signal(&self) -> impl Signal<Item = ResetStage> {
        self.form.state.signal_ref(ResetStage::of)
    }

    pub fn email(&self) -> String {
        self.form.field(Field::Email).get_cloned()
    }

    /// Back to the request form, keeping the typed address.
    pub fn reset_state(&self) {
        self.form.reset();
    }
}
