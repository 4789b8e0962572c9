use std::sync::Arc;

use ck_blogsite_core::{Field, Route};
use ck_ui_components::alert::status_banner;
use ck_ui_components::form::{submit_button, FieldInput, InputKind};
use dominator::{html, Dom};

use crate::components::auth_links::{back_home, AuthPrompt};
use crate::pages::password_reset::state::ResetState;

pub struct RequestView;

impl RequestView {
    pub fn render(state: Arc<ResetState>) -> Dom {
        let form = &state.form;

        html!("div", {
            .children(&mut [
                FieldInput::new(form, Field::Email, "Email address")
                    .kind(InputKind::Email)
                    .placeholder("Enter your email")
                    .render(),
                submit_button(form, "Send reset link", "Sending..."),
                status_banner(form),
                AuthPrompt {
                    app: state.app.clone(),
                    text: "Remember your password? ",
                    link_text: "Sign in",
                    link_route: Route::Login,
                }
                .render(),
                back_home(&state.app),
            ])
        })
    }
}
