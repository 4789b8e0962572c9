use std::sync::Arc;

use ck_blogsite_core::Route;
use dominator::{html, Dom};

use crate::app::App;

pub struct NotFoundPage;

impl NotFoundPage {
    pub fn render(app: &Arc<App>, route: &Route) -> Dom {
        log::debug!("Auth UI has no page for {:?}", route);

        html!("div", {
            .class(["min-h-screen", "bg-base-200", "flex", "flex-col", "items-center", "justify-center", "gap-4"])
            .children(&mut [
                html!("h1", {
                    .class(["text-3xl", "font-bold"])
                    .text("Page not found")
                }),
                html!("a", {
                    .class(["btn", "btn-primary"])
                    .text("Go to sign in")
                    .apply(app.router.link(Route::Login))
                }),
            ])
        })
    }
}
