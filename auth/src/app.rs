use std::sync::Arc;

use ck_blogsite_core::{AppKind, Clock, FormKind, FormSubmission, MockConfig, Route};
use ck_ui_components::config::CONFIG;
use ck_ui_components::{GlooClock, Router};
use dominator::{clone, html, Dom};
use futures_signals::signal::SignalExt;

use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::password_change::PasswordChangePage;
use crate::pages::password_reset::PasswordResetPage;
use crate::pages::signup::SignupPage;

pub struct App {
    pub router: Arc<Router>,
    pub config: Arc<MockConfig>,
    pub clock: Arc<dyn Clock>,
}

impl App {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            router: Router::new(AppKind::Auth),
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
                    Route::Login => LoginPage::new(app.clone()).render(),
                    Route::Signup => SignupPage::new(app.clone()).render(),
                    Route::PasswordReset => PasswordResetPage::new(app.clone()).render(),
                    Route::PasswordChange => PasswordChangePage::new(app.clone()).render(),
                    other => NotFoundPage::render(&app, &other),
                })
            })))
        })
    }
}
