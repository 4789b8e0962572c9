mod sections;
mod state;

use std::sync::Arc;

use ck_ui_components::loading::splash;
use dominator::{clone, events, html, Dom};

use crate::app::App;
use crate::components::nav::navbar;
use state::HomeState;

pub struct HomePage {
    state: Arc<HomeState>,
}

impl HomePage {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            state: HomeState::new(app),
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let state = self.state.clone();

        html!("div", {
            .class(["relative", "min-h-screen", "bg-base-200", "overflow-hidden"])
            .future(state.clone().hide_splash())
            .future(state.clone().reveal_content())
            .global_event(clone!(state => move |_: events::Scroll| {
                state.on_scroll();
            }))
            .children(&mut [
                splash(state.loading.signal(), "CK Blogsite", "Preparing your writing space..."),
                sections::backdrop(&state),
                navbar(&state.app),
                html!("main", {
                    .class("relative")
                    .children(&mut [
                        sections::hero(&state),
                        sections::stats(&state),
                        sections::core_features(&state),
                        sections::features(&state),
                        sections::testimonials(&state),
                        sections::call_to_action(&state),
                        sections::quick_links(&state),
                    ])
                }),
            ])
        })
    }
}
