use ck_blogsite_core::strength::{PasswordStrength, MAX_SCORE};
use dominator::{html, Dom};
use futures_signals::signal::Mutable;

const UNLIT: &str = "bg-gray-200";

/// Five-segment meter under the signup password, hidden while the password is empty.
pub fn strength_meter(password: Mutable<String>) -> Dom {
    html!("div", {
        .class("mt-2")
        .visible_signal(password.signal_ref(|password| !password.is_empty()))
        .children(&mut [
            html!("div", {
                .class(["flex", "gap-1", "mb-1"])
                .apply(|dom| {
                    (1..=MAX_SCORE).fold(dom, |dom, level| dom.child(segment(&password, level)))
                })
            }),
            html!("p", {
                .class(["text-xs", "text-base-content/70"])
                .text_signal(password.signal_ref(|password| PasswordStrength::of(password).label()))
            }),
        ])
    })
}

fn segment(password: &Mutable<String>, level: u8) -> Dom {
    html!("div", {
        .attribute_signal("class", password.signal_ref(move |password| {
            let strength = PasswordStrength::of(password);
            let color = if strength.fills(level) { strength.color() } else { UNLIT };
            format!("h-2 flex-1 rounded {}", color)
        }))
    })
}
