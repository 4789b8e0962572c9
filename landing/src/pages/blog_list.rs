use std::sync::Arc;

use ck_blogsite_core::blog;
use dominator::{html, Dom};

use crate::app::App;
use crate::components::blog_card::blog_card;
use crate::components::page::{page_heading, page_shell};

pub struct BlogListPage;

impl BlogListPage {
    pub fn render(app: &Arc<App>) -> Dom {
        let posts = blog::catalogue();
        log::debug!("Rendering {} blog cards", posts.len());

        page_shell(
            app,
            vec![
                page_heading(
                    "Explore Inspiring Blogs",
                    Some("Discover the latest articles, tips, and stories from our creative community."),
                ),
                html!("div", {
                    .class(["grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-8"])
                    .apply(|dom| posts.iter().fold(dom, |dom, post| dom.child(blog_card(app, post))))
                }),
            ],
        )
    }
}
