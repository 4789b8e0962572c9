mod field_input;
mod strength_meter;
mod submit_button;

pub use field_input::*;
pub use strength_meter::*;
pub use submit_button::*;

use std::sync::Arc;

use ck_blogsite_core::FormSubmission;
use wasm_bindgen_futures::spawn_local;

/// Runs a submission on the browser event loop.
pub fn submit_in_background(form: &Arc<FormSubmission>) {
    let form = form.clone();
    spawn_local(async move {
        let outcome = form.submit().await;
        log::debug!("{} submit finished: {:?}", form.kind, outcome);
    });
}
