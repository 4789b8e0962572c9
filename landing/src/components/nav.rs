use std::sync::Arc;

use ck_blogsite_core::Route;
use dominator::{html, Dom};

use crate::app::App;

fn nav_link(app: &Arc<App>, route: Route, text: &'static str) -> Dom {
    html!("li", {
        .child(html!("a", {
            .text(text)
            .apply(app.router.link(route))
        }))
    })
}

/// Top bar shared by every landing page.
pub fn navbar(app: &Arc<App>) -> Dom {
    html!("nav", {
        .class(["navbar", "bg-base-100/80", "backdrop-blur", "sticky", "top-0", "z-40", "shadow-sm"])
        .children(&mut [
            html!("div", {
                .class("flex-1")
                .child(html!("a", {
                    .class(["btn", "btn-ghost", "text-xl", "font-bold"])
                    .text("CK Blogsite")
                    .apply(app.router.link(Route::Home))
                }))
            }),
            html!("ul", {
                .class(["menu", "menu-horizontal", "px-1", "hidden", "sm:flex"])
                .children(&mut [
                    nav_link(app, Route::BlogList, "Blogs"),
                    nav_link(app, Route::Dashboard, "Dashboard"),
                ])
            }),
            html!("div", {
                .class(["flex-none", "gap-2"])
                .children(&mut [
                    html!("a", {
                        .class(["btn", "btn-ghost", "btn-sm"])
                        .text("Sign in")
                        .apply(app.router.link(Route::Login))
                    }),
                    html!("a", {
                        .class(["btn", "btn-neutral", "btn-sm"])
                        .text("Get started")
                        .apply(app.router.link(Route::Signup))
                    }),
                ])
            }),
        ])
    })
}
