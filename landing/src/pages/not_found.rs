use std::sync::Arc;

use ck_blogsite_core::Route;
use dominator::{html, Dom};

use crate::app::App;
use crate::components::page::{page_heading, page_shell};

pub struct NotFoundPage;

impl NotFoundPage {
    pub fn render(app: &Arc<App>, route: &Route) -> Dom {
        log::debug!("Landing UI has no page for {:?}", route);

        page_shell(
            app,
            vec![
                page_heading("Page not found", Some("The page you are looking for does not exist.")),
                html!("div", {
                    .class("text-center")
                    .child(html!("a", {
                        .class(["btn", "btn-primary"])
                        .text("Back to Home")
                        .apply(app.router.link(Route::Home))
                    }))
                }),
            ],
        )
    }
}
