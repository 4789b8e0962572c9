use dominator::{html, Dom};
use futures_signals::signal::{Signal, SignalExt};

pub fn loading_indicator<S>(is_loading: S) -> Dom
where
    S: Signal<Item = bool> + 'static,
{
    html!("span", {
        .class(["loading", "loading-spinner", "loading-sm"])
        .class_signal("hidden", is_loading.map(|loading| !loading))
    })
}

/// Full-screen splash shown while the landing page warms up.
pub fn splash<S>(visible: S, title: &str, caption: &str) -> Dom
where
    S: Signal<Item = bool> + 'static,
{
    html!("div", {
        .class(["fixed", "inset-0", "z-50", "flex", "flex-col", "items-center", "justify-center", "bg-neutral", "transition-opacity", "duration-500"])
        .visible_signal(visible)
        .children(&mut [
            html!("h1", {
                .class(["text-6xl", "font-bold", "text-white", "tracking-tight", "animate-pulse"])
                .text(title)
            }),
            html!("span", {
                .class(["loading", "loading-dots", "loading-lg", "text-white", "mt-8"])
            }),
            html!("p", {
                .class(["text-gray-500", "font-light", "text-lg", "mt-4", "animate-pulse"])
                .text(caption)
            }),
        ])
    })
}
