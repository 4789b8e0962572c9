use std::sync::Arc;

use dominator::{html, Dom};

use super::nav::navbar;
use crate::app::App;

/// Navbar plus a centered column holding `content`.
pub fn page_shell(app: &Arc<App>, content: Vec<Dom>) -> Dom {
    html!("div", {
        .class(["min-h-screen", "bg-base-200"])
        .children(&mut [
            navbar(app),
            html!("main", {
                .class(["max-w-5xl", "mx-auto", "px-4", "py-12", "animate-rise"])
                .apply(|dom| content.into_iter().fold(dom, |dom, child| dom.child(child)))
            }),
        ])
    })
}

pub fn page_heading(title: &str, subtitle: Option<&str>) -> Dom {
    html!("header", {
        .class(["text-center", "mb-10"])
        .child(html!("h1", {
            .class(["text-4xl", "font-bold", "mb-2"])
            .text(title)
        }))
        .apply(|dom| match subtitle {
            Some(subtitle) => dom.child(html!("p", {
                .class(["text-lg", "text-base-content/70"])
                .text(subtitle)
            })),
            None => dom,
        })
    })
}
