mod state;
mod views;

use std::sync::Arc;

use dominator::{clone, html, Dom};
use futures_signals::signal::SignalExt;

use super::form_page;
use crate::app::App;
use crate::components::auth_card::{auth_card, CardHeader};
use state::ResetState;
use views::{RequestView, ResetStage, SentView};

pub struct PasswordResetPage {
    state: Arc<ResetState>,
}

impl PasswordResetPage {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            state: ResetState::new(app),
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let state = self.state.clone();

        let card = auth_card(
            &state.form,
            CardHeader {
                glyph: "✉",
                title: "Reset Password",
                subtitle: "We'll help you get back in",
            },
            vec![
                html!("div", {
                    .class(["text-center", "mb-6"])
                    .children(&mut [
                        html!("h2", {
                            .class(["text-lg", "font-semibold"])
                            .text_signal(state.stage_signal().map(|stage| stage.title()))
                        }),
                        html!("p", {
                            .class(["text-sm", "text-base-content/70"])
                            .text_signal(state.stage_signal().map(|stage| stage.description()))
                        }),
                    ])
                }),
                html!("div", {
                    .child_signal(state.stage_signal().dedupe().map(clone!(state => move |stage| {
                        Some(match stage {
                            ResetStage::Request => RequestView::render(state.clone()),
                            ResetStage::Sent => SentView::render(state.clone()),
                        })
                    })))
                }),
            ],
            None,
        );

        form_page(&state.form, card)
    }
}
