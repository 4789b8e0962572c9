use ck_blogsite_core::{FormSubmission, SubmissionState};
use dominator::{html, Dom};
use futures_signals::signal::SignalExt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn class(&self) -> &'static str {
        match self {
            BannerKind::Success => "alert-success",
            BannerKind::Error => "alert-error",
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            BannerKind::Success => "✔",
            BannerKind::Error => "⚠",
        }
    }
}

pub fn banner(kind: BannerKind, message: &str) -> Dom {
    html!("div", {
        .class(["alert", kind.class(), "text-sm", "mt-4"])
        .attribute("role", "alert")
        .children(&mut [
            html!("span", {
                .text(kind.glyph())
            }),
            html!("span", {
                .text(message)
            }),
        ])
    })
}

/// Success or error message of the last submission, if any.
pub fn status_banner(form: &FormSubmission) -> Dom {
    html!("div", {
        .child_signal(form.state.signal_cloned().map(|state| match state {
            SubmissionState::Success(message) => Some(banner(BannerKind::Success, &message)),
            SubmissionState::Error(message) => Some(banner(BannerKind::Error, &message)),
            SubmissionState::Idle | SubmissionState::Loading => None,
        }))
    })
}
