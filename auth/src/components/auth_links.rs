use std::sync::Arc;

use ck_blogsite_core::Route;
use dominator::{html, Dom};

use crate::app::App;

/// "Don't have an account? Create account" style prompt.
pub struct AuthPrompt {
    pub app: Arc<App>,
    pub text: &'static str,
    pub link_text: &'static str,
    pub link_route: Route,
}

impl AuthPrompt {
    pub fn render(self) -> Dom {
        html!("p", {
            .class(["text-sm", "text-center", "mt-6"])
            .children(&mut [
                html!("span", {
                    .text(self.text)
                }),
                html!("a", {
                    .class(["link", "link-primary", "font-medium"])
                    .text(self.link_text)
                    .apply(self.app.router.link(self.link_route))
                })
            ])
        })
    }
}

pub fn secondary_link(app: &Arc<App>, route: Route, text: &'static str) -> Dom {
    html!("p", {
        .class(["text-center", "mt-2"])
        .children(&mut [
            html!("a", {
                .class(["link", "link-hover", "text-sm", "text-base-content/60"])
                .text(text)
                .apply(app.router.link(route))
            })
        ])
    })
}

pub fn back_home(app: &Arc<App>) -> Dom {
    html!("div", {
        .class(["text-center", "mt-4"])
        .children(&mut [
            html!("a", {
                .class(["btn", "btn-sm", "btn-ghost"])
                .text("← Back to Home")
                .apply(app.router.link(Route::Home))
            })
        ])
    })
}
