use std::sync::Arc;

use ck_blogsite_core::{AppKind, Clock, FormKind, FormSubmission, MockConfig, Route};
use ck_ui_components::config::CONFIG;
use ck_ui_components::{GlooClock, Router};
use dominator::{clone, html, Dom};
use futures_signals::signal::SignalExt;

use crate::pages::blog_create::BlogCreatePage;
use crate::pages::blog_detail::BlogDetailPage;
use crate::pages::blog_list::BlogListPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;

pub struct App {
    pub router: Arc<Router>,
    pub config: Arc<MockConfig>,
    pub clock: Arc<dyn Clock>,
}

impl App {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            router: Router::new(AppKind::Landing),
            config: CONFIG.clone(),
            clock: Arc::new(GlooClock),
        })
    }

    pub fn mock_form(&self, kind: FormKind) -> Arc<FormSubmission> {
        FormSubmission::mock(kind, self.config.clone(), self.clock.clone())
    }

    pub fn render(app: Arc<Self>) -> Dom {
        html!("div", {
            .class("global")
            .child_signal(app.router.current_route.signal_cloned().map(clone!(app => move |route| {
                Some(match route {
                    Route::Home => HomePage::new(app.clone()).render(),
                    Route::BlogList => BlogListPage::render(&app),
                    Route::BlogDetail(id) => BlogDetailPage::render(&app, &id),
                    Route::BlogCreate => BlogCreatePage::new(app.clone()).render(),
                    Route::Dashboard => DashboardPage::render(&app),
                    other => NotFoundPage::render(&app, &other),
                })
            })))
        })
    }
}
