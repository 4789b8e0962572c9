use std::sync::Arc;

use ck_blogsite_core::{Field, FormKind, FormSubmission, Route};
use ck_ui_components::alert::status_banner;
use ck_ui_components::form::{submit_button, FieldInput, InputKind};
use dominator::Dom;

use super::form_page;
use crate::app::App;
use crate::components::auth_card::{auth_card, CardHeader};
use crate::components::auth_links::secondary_link;

pub struct PasswordChangePage {
    app: Arc<App>,
    form: Arc<FormSubmission>,
}

impl PasswordChangePage {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            form: app.mock_form(FormKind::PasswordChange),
            app,
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let form = &self.form;

        let card = auth_card(
            form,
            CardHeader {
                glyph: "🔑",
                title: "Change Password",
                subtitle: "Update your account password",
            },
            vec![
                FieldInput::new(form, Field::CurrentPassword, "Current Password")
                    .kind(InputKind::Password)
                    .placeholder("Enter current password")
                    .render(),
                FieldInput::new(form, Field::NewPassword, "New Password")
                    .kind(InputKind::Password)
                    .placeholder("Enter new password")
                    .render(),
                submit_button(form, "Change password", "Changing..."),
                status_banner(form),
                secondary_link(&self.app, Route::Dashboard, "Back to Dashboard"),
            ],
            None,
        );

        form_page(form, card)
    }
}
