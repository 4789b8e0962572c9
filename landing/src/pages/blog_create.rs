use std::sync::Arc;

use ck_blogsite_core::{Field, FormKind, FormSubmission, Route, SubmissionState};
use ck_ui_components::alert::status_banner;
use ck_ui_components::form::{submit_button, FieldInput, InputKind};
use dominator::{clone, html, Dom};
use futures_signals::signal::SignalExt;

use crate::app::App;
use crate::components::page::page_shell;

/// Pause between the success banner and the trip back to the dashboard.
const REDIRECT_MS: u32 = 2000;

pub struct BlogCreatePage {
    app: Arc<App>,
    form: Arc<FormSubmission>,
}

impl BlogCreatePage {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            form: app.mock_form(FormKind::BlogCreate),
            app,
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let state = self;
        let form = &self.form;

        page_shell(
            &self.app,
            vec![html!("div", {
                .class(["card", "bg-base-100", "shadow-md", "max-w-2xl", "mx-auto"])
                .class_signal("animate-shake", form.shake.signal())
                .future(clone!(state => async move {
                    state.form.state
                        .signal_ref(|s| matches!(s, SubmissionState::Success(_)))
                        .wait_for(true)
                        .await;
                    state.form.values.clear();
                    state.app.clock.sleep(REDIRECT_MS).await;
                    state.app.router.push(&Route::Dashboard);
                }))
                .after_removed(clone!(form => move |_| {
                    form.cancel();
                }))
                .child(html!("div", {
                    .class(["card-body", "space-y-4"])
                    .children(&mut [
                        html!("h2", {
                            .class(["text-2xl", "font-bold", "text-center"])
                            .text("Create Blog")
                        }),
                        FieldInput::new(form, Field::Title, "Title")
                            .placeholder("Title")
                            .clearing_errors()
                            .render(),
                        FieldInput::new(form, Field::Content, "Content")
                            .kind(InputKind::TextArea)
                            .placeholder("Content")
                            .clearing_errors()
                            .render(),
                        submit_button(form, "Create", "Creating..."),
                        status_banner(form),
                    ])
                }))
            })],
        )
    }
}
