use std::sync::Arc;

use ck_blogsite_core::Route;
use dominator::{clone, events, html, Dom};

use crate::components::auth_links::secondary_link;
use crate::pages::password_reset::state::ResetState;

pub struct SentView;

impl SentView {
    pub fn render(state: Arc<ResetState>) -> Dom {
        html!("div", {
            .class("text-center")
            .children(&mut [
                html!("div", {
                    .class(["w-16", "h-16", "rounded-full", "bg-success/20", "text-success", "flex", "items-center", "justify-center", "mx-auto", "mb-6", "text-3xl"])
                    .text("✉")
                }),
                html!("p", {
                    .class(["text-base-content/70", "mb-6"])
                    .children(&mut [
                        html!("span", {
                            .text("We've sent a password reset link to ")
                        }),
                        html!("strong", {
                            .text(&state.email())
                        }),
                    ])
                }),
                html!("button", {
                    .class(["btn", "btn-neutral", "w-full"])
                    .attribute("type", "button")
                    .text("Back to reset")
                    .event(clone!(state => move |_: events::Click| {
                        state.reset_state();
                    }))
                }),
                secondary_link(&state.app, Route::Login, "Back to Login"),
            ])
        })
    }
}
