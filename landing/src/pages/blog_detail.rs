use std::sync::Arc;

use ck_blogsite_core::blog::{self, BlogPost};
use ck_blogsite_core::Route;
use dominator::{html, Dom};

use crate::app::App;
use crate::components::page::page_shell;

pub struct BlogDetailPage;

impl BlogDetailPage {
    /// Any id renders; ids from the bundled catalogue also show that post.
    pub fn render(app: &Arc<App>, id: &str) -> Dom {
        let post = blog::find(id);
        if post.is_none() {
            log::debug!("No bundled post for id {}", id);
        }

        page_shell(
            app,
            vec![html!("div", {
                .class(["card", "bg-base-100", "shadow", "max-w-2xl", "mx-auto"])
                .child(html!("div", {
                    .class("card-body")
                    .children(&mut [
                        html!("h2", {
                            .class(["text-3xl", "font-bold", "mb-4"])
                            .text(&format!("Blog Title {}", id))
                        }),
                        html!("p", {
                            .class(["text-base-content/70", "mb-6"])
                            .text(&format!("This is the detailed content of the blog post with ID {}.", id))
                        }),
                    ])
                    .apply(|dom| match post {
                        Some(post) => dom.child(Self::render_post(post)),
                        None => dom,
                    })
                    .child(html!("div", {
                        .class("card-actions")
                        .child(html!("a", {
                            .class(["btn", "btn-secondary"])
                            .text("Back to Blog List")
                            .apply(app.router.link(Route::BlogList))
                        }))
                    }))
                }))
            })],
        )
    }

    fn render_post(post: &BlogPost) -> Dom {
        html!("section", {
            .class(["mb-6", "space-y-3"])
            .children(&mut [
                html!("img", {
                    .class(["rounded-xl", "w-full", "h-64", "object-cover"])
                    .attribute("src", &post.image)
                    .attribute("alt", &post.title)
                }),
                html!("h3", {
                    .class(["text-xl", "font-semibold"])
                    .text(&post.title)
                }),
                html!("p", {
                    .class(["text-sm", "text-base-content/50"])
                    .text(&format!("{} • {}", post.author, post.display_date()))
                }),
                html!("p", {
                    .text(&post.summary)
                }),
            ])
        })
    }
}
