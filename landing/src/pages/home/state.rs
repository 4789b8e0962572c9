use std::sync::Arc;

use ck_blogsite_core::home::{self, CONTENT_REVEAL_MS, LOADING_SCREEN_MS};
use futures_signals::signal::{Mutable, Signal, SignalExt};

use crate::app::App;

pub struct HomeState {
    pub app: Arc<App>,
    pub scroll_y: Mutable<f64>,
    pub loading: Mutable<bool>,
    pub revealed: Mutable<bool>,
}

impl HomeState {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            app,
            scroll_y: Mutable::new(0.0),
            loading: Mutable::new(true),
            revealed: Mutable::new(false),
        })
    }

    pub async fn hide_splash(self: Arc<Self>) {
        self.app.clock.sleep(LOADING_SCREEN_MS).await;
        log::debug!("Home splash done");
        self.loading.set_neq(false);
    }

    pub async fn reveal_content(self: Arc<Self>) {
        self.app.clock.sleep(CONTENT_REVEAL_MS).await;
        self.revealed.set_neq(true);
    }

    pub fn on_scroll(&self) {
        let y = web_sys::window().and_then(|window| window.scroll_y().ok());
        if let Some(y) = y {
            self.scroll_y.set_neq(y);
        }
    }

    pub fn parallax(&self, factor: f64) -> impl Signal<Item = String> {
        self.scroll_y.signal().map(move |y| home::translate_y(y, factor))
    }

    pub fn drift(&self, factor_x: f64, factor_y: f64) -> impl Signal<Item = String> {
        self.scroll_y
            .signal()
            .map(move |y| home::translate(y, factor_x, factor_y))
    }

    pub fn overlay(&self) -> impl Signal<Item = String> {
        self.scroll_y
            .signal()
            .map(|y| format!("rgba(255, 255, 255, {})", home::overlay_alpha(y)))
    }

    pub fn hidden_signal(&self) -> impl Signal<Item = bool> {
        self.revealed.signal().map(|revealed| !revealed)
    }
}
