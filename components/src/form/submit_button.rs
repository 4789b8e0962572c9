use std::sync::Arc;

use ck_blogsite_core::FormSubmission;
use dominator::{clone, events, html, Dom};
use futures_signals::signal::SignalExt;

use super::submit_in_background;
use crate::loading::loading_indicator;

/// Primary button that submits `form`; disabled with a spinner while a request is pending.
pub fn submit_button(form: &Arc<FormSubmission>, label: &'static str, busy_label: &'static str) -> Dom {
    html!("button", {
        .class(["btn", "btn-primary", "w-full", "mt-6", "gap-2"])
        .attribute("type", "button")
        .attribute_signal("disabled", form.loading_signal().map(|loading| {
            if loading {
                Some("true")
            } else {
                None
            }
        }))
        .children(&mut [
            loading_indicator(form.loading_signal()),
            html!("span", {
                .text_signal(form.loading_signal().map(move |loading| if loading { busy_label } else { label }))
            }),
        ])
        .event(clone!(form => move |_: events::Click| {
            submit_in_background(&form);
        }))
    })
}
