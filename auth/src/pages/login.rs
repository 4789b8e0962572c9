use std::sync::Arc;

use ck_blogsite_core::{Field, FormKind, FormSubmission, Route};
use ck_ui_components::alert::status_banner;
use ck_ui_components::form::{submit_button, FieldInput, InputKind};
use dominator::{html, Dom};

use super::{form_page, redirect_on_success};
use crate::app::App;
use crate::components::auth_card::{auth_card, legal_footer, CardHeader};
use crate::components::auth_links::{back_home, secondary_link, AuthPrompt};

pub struct LoginPage {
    app: Arc<App>,
    form: Arc<FormSubmission>,
}

impl LoginPage {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            form: app.mock_form(FormKind::Login),
            app,
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let app = &self.app;
        let form = &self.form;

        let card = auth_card(
            form,
            CardHeader {
                glyph: "🔒",
                title: "Welcome back",
                subtitle: "Sign in to continue to CK Blogsite",
            },
            vec![
                FieldInput::new(form, Field::Email, "Email address")
                    .kind(InputKind::Email)
                    .placeholder("Enter your email")
                    .render(),
                FieldInput::new(form, Field::Password, "Password")
                    .kind(InputKind::Password)
                    .placeholder("Enter your password")
                    .render(),
                submit_button(form, "Sign in", "Signing in..."),
                status_banner(form),
                AuthPrompt {
                    app: app.clone(),
                    text: "Don't have an account? ",
                    link_text: "Create account",
                    link_route: Route::Signup,
                }
                .render(),
                secondary_link(app, Route::PasswordReset, "Forgot your password?"),
                back_home(app),
            ],
            Some(legal_footer("signing in")),
        );

        html!("div", {
            .future(redirect_on_success(app, form, Route::Dashboard))
            .child(form_page(form, card))
        })
    }
}
