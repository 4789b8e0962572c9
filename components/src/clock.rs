use async_trait::async_trait;
use ck_blogsite_core::Clock;
use gloo_timers::future::TimeoutFuture;

/// `setTimeout`-backed delays for the browser.
pub struct GlooClock;

#[async_trait(?Send)]
impl Clock for GlooClock {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
