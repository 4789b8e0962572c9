pub mod login;
pub mod not_found;
pub mod password_change;
pub mod password_reset;
pub mod signup;

use std::future::Future;
use std::sync::Arc;

use ck_blogsite_core::{FormSubmission, Route, SubmissionState};
use dominator::{clone, html, Dom};
use futures_signals::signal::SignalExt;

use crate::app::App;

/// Pause between a success banner and the follow-up navigation.
const REDIRECT_MS: u32 = 2000;

fn redirect_on_success(
    app: &Arc<App>,
    form: &Arc<FormSubmission>,
    route: Route,
) -> impl Future<Output = ()> + 'static {
    let app = app.clone();
    let form = form.clone();
    async move {
        form.state
            .signal_ref(|state| matches!(state, SubmissionState::Success(_)))
            .wait_for(true)
            .await;
        app.clock.sleep(REDIRECT_MS).await;
        app.router.push(&route);
    }
}

/// Page root owning `form`: any pending request is cancelled when the page goes away.
fn form_page(form: &Arc<FormSubmission>, content: Dom) -> Dom {
    html!("div", {
        .after_removed(clone!(form => move |_| {
            form.cancel();
        }))
        .child(content)
    })
}
