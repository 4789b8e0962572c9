use std::sync::Arc;

use ck_blogsite_core::blog::BlogPost;
use ck_blogsite_core::Route;
use dominator::{html, Dom};

use crate::app::App;

pub fn blog_card(app: &Arc<App>, post: &BlogPost) -> Dom {
    html!("article", {
        .class(["card", "bg-base-100", "shadow-md", "hover:shadow-xl", "transition-shadow", "overflow-hidden"])
        .children(&mut [
            html!("figure", {
                .child(html!("img", {
                    .class(["h-48", "w-full", "object-cover"])
                    .attribute("src", &post.image)
                    .attribute("alt", &post.title)
                    .attribute("loading", "lazy")
                }))
            }),
            html!("div", {
                .class("card-body")
                .children(&mut [
                    html!("h2", {
                        .class(["card-title", "text-lg"])
                        .text(&post.title)
                    }),
                    html!("p", {
                        .class(["text-sm", "text-base-content/70"])
                        .text(&post.summary)
                    }),
                    html!("div", {
                        .class(["flex", "items-center", "gap-2", "text-xs", "text-base-content/50"])
                        .children(&mut [
                            html!("span", { .text(&post.author) }),
                            html!("span", { .text("•") }),
                            html!("span", { .text(&post.display_date()) }),
                        ])
                    }),
                    html!("div", {
                        .class(["card-actions", "justify-end"])
                        .child(html!("a", {
                            .class(["btn", "btn-sm", "btn-neutral"])
                            .text("Read More")
                            .apply(app.router.link(Route::BlogDetail(post.id.to_string())))
                        }))
                    }),
                ])
            }),
        ])
    })
}
