use std::sync::Arc;

use ck_blogsite_core::blog;
use ck_blogsite_core::Route;
use dominator::{html, Dom};

use crate::app::App;
use crate::components::page::{page_heading, page_shell};

pub struct DashboardPage;

impl DashboardPage {
    pub fn render(app: &Arc<App>) -> Dom {
        page_shell(
            app,
            vec![
                page_heading("Member Dashboard", None),
                html!("div", {
                    .class(["grid", "grid-cols-1", "md:grid-cols-2", "gap-6"])
                    .children(&mut [
                        Self::your_blogs(app),
                        Self::account(app),
                    ])
                }),
            ],
        )
    }

    fn your_blogs(app: &Arc<App>) -> Dom {
        html!("div", {
            .class(["card", "bg-base-100", "shadow"])
            .child(html!("div", {
                .class("card-body")
                .children(&mut [
                    html!("h3", {
                        .class(["text-xl", "font-semibold", "mb-2"])
                        .text("Your Blogs")
                    }),
                    html!("ul", {
                        .class(["list-disc", "pl-5", "space-y-2"])
                        .apply(|dom| {
                            blog::catalogue().iter().fold(dom, |dom, post| {
                                dom.child(html!("li", {
                                    .child(html!("a", {
                                        .class(["link", "link-hover"])
                                        .text(&post.title)
                                        .apply(app.router.link(Route::BlogDetail(post.id.to_string())))
                                    }))
                                }))
                            })
                        })
                    }),
                    html!("a", {
                        .class(["btn", "btn-primary", "mt-4"])
                        .text("Create New Blog")
                        .apply(app.router.link(Route::BlogCreate))
                    }),
                ])
            }))
        })
    }

    fn account(app: &Arc<App>) -> Dom {
        html!("div", {
            .class(["card", "bg-base-100", "shadow"])
            .child(html!("div", {
                .class("card-body")
                .children(&mut [
                    html!("h3", {
                        .class(["text-xl", "font-semibold", "mb-2"])
                        .text("Account")
                    }),
                    html!("a", {
                        .class(["btn", "btn-secondary"])
                        .text("Change Password")
                        .apply(app.router.link(Route::PasswordChange))
                    }),
                ])
            }))
        })
    }
}
