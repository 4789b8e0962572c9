use std::sync::Arc;

use ck_blogsite_core::{AppKind, Route};
use dominator::{events, routing, DomBuilder, EventOptions};
use futures_signals::signal::{Mutable, SignalExt};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

pub struct Router {
    pub current_route: Mutable<Route>,
    app: AppKind,
}

impl Router {
    /// Tracks the browser URL for the routes served by `app`.
    pub fn new(app: AppKind) -> Arc<Self> {
        let initial = Route::from_url(&routing::url().lock_ref());
        let router = Arc::new(Self {
            current_route: Mutable::new(initial),
            app,
        });

        {
            let router_ref = router.clone();

            spawn_local(async move {
                routing::url()
                    .signal_ref(|url| {
                        log::debug!("URL signal received: {}", url);
                        Route::from_url(url)
                    })
                    .for_each(move |route| {
                        log::debug!("Route changed to: {:?}", route);
                        router_ref.current_route.set_neq(route);
                        async {}
                    })
                    .await;
            });
        }

        router
    }

    /// In-app routes use the history API; the other bundle needs a full page load.
    pub fn push(&self, route: &Route) {
        let path = route.path();
        log::debug!("Pushing route: {}", path);

        if route.app() == self.app {
            routing::go_to_url(&path);
            self.current_route.set_neq(route.clone());
            return;
        }

        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(&path) {
                    log::error!("Failed to navigate to {}: {:?}", path, e);
                }
            }
            None => log::error!("No window to navigate to {}", path),
        }
    }

    /// Turns an anchor into a link to `route`, intercepting clicks for in-app routes.
    pub fn link(
        self: &Arc<Self>,
        route: Route,
    ) -> impl FnOnce(DomBuilder<HtmlElement>) -> DomBuilder<HtmlElement> {
        let router = self.clone();
        move |dom| {
            let dom = dom.attribute("href", &route.path());
            if route.app() != router.app {
                return dom;
            }
            dom.event_with_options(&EventOptions::preventable(), move |e: events::Click| {
                e.prevent_default();
                router.push(&route);
            })
        }
    }
}
