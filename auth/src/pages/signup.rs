use std::sync::Arc;

use ck_blogsite_core::{Field, FormKind, FormSubmission, Route};
use ck_ui_components::alert::status_banner;
use ck_ui_components::form::{strength_meter, submit_button, FieldInput, InputKind};
use dominator::{html, Dom};

use super::{form_page, redirect_on_success};
use crate::app::App;
use crate::components::auth_card::{auth_card, legal_footer, CardHeader};
use crate::components::auth_links::{back_home, AuthPrompt};

pub struct SignupPage {
    app: Arc<App>,
    form: Arc<FormSubmission>,
}

impl SignupPage {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            form: app.mock_form(FormKind::Signup),
            app,
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let app = &self.app;
        let form = &self.form;

        let card = auth_card(
            form,
            CardHeader {
                glyph: "✍",
                title: "Create account",
                subtitle: "Join CK Blogsite today",
            },
            vec![
                FieldInput::new(form, Field::Name, "Full Name")
                    .placeholder("Enter your full name")
                    .clearing_errors()
                    .render(),
                FieldInput::new(form, Field::Email, "Email address")
                    .kind(InputKind::Email)
                    .placeholder("Enter your email")
                    .clearing_errors()
                    .render(),
                FieldInput::new(form, Field::Password, "Password")
                    .kind(InputKind::Password)
                    .placeholder("Create a password")
                    .clearing_errors()
                    .render(),
                strength_meter(form.field(Field::Password)),
                FieldInput::new(form, Field::ConfirmPassword, "Confirm Password")
                    .kind(InputKind::Password)
                    .placeholder("Confirm your password")
                    .clearing_errors()
                    .render(),
                submit_button(form, "Create account", "Creating account..."),
                status_banner(form),
                AuthPrompt {
                    app: app.clone(),
                    text: "Already have an account? ",
                    link_text: "Sign in",
                    link_route: Route::Login,
                }
                .render(),
                back_home(app),
            ],
            Some(legal_footer("creating an account")),
        );

        html!("div", {
            .future(redirect_on_success(app, form, Route::Login))
            .child(form_page(form, card))
        })
    }
}
