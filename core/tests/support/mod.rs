use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ck_blogsite_core::config::{MockConfig, DEFAULT_CONFIG};
use ck_blogsite_core::{Clock, Field, FormKind, FormSubmission};

/// Drives delays off tokio's clock so `start_paused` tests run instantly.
pub struct TokioClock;

#[async_trait(?Send)]
impl Clock for TokioClock {
    async fn sleep(&self, ms: u32) {
        tokio::time::sleep(Duration::from_millis(ms.into())).await;
    }
}

pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub fn mock_form(kind: FormKind) -> Arc<FormSubmission> {
    mock_form_with(kind, DEFAULT_CONFIG.clone())
}

pub fn mock_form_with(kind: FormKind, config: Arc<MockConfig>) -> Arc<FormSubmission> {
    FormSubmission::mock(kind, config, Arc::new(TokioClock))
}

pub fn fill(form: &FormSubmission, values: &[(Field, &str)]) {
    for (field, value) in values {
        form.values.set(*field, *value);
    }
}
