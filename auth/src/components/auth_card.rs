use ck_blogsite_core::FormSubmission;
use dominator::{html, Dom};

/// Icon, heading and subheading at the top of an auth card.
pub struct CardHeader {
    pub glyph: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl CardHeader {
    fn render(&self) -> Dom {
        html!("div", {
            .class(["text-center", "mb-8"])
            .children(&mut [
                html!("div", {
                    .class(["w-16", "h-16", "rounded-2xl", "bg-neutral", "text-neutral-content", "flex", "items-center", "justify-center", "mx-auto", "mb-4", "shadow-lg", "text-3xl", "transition-transform", "hover:scale-105"])
                    .text(self.glyph)
                }),
                html!("h1", {
                    .class(["text-2xl", "font-semibold"])
                    .text(self.title)
                }),
                html!("p", {
                    .class(["text-base-content/70", "mt-2"])
                    .text(self.subtitle)
                }),
            ])
        })
    }
}

/// Centered card that shakes whenever `form` rejects a submit.
pub fn auth_card(form: &FormSubmission, header: CardHeader, body: Vec<Dom>, footer: Option<Dom>) -> Dom {
    html!("div", {
        .class(["min-h-screen", "bg-base-200", "flex", "flex-col"])
        .children(&mut [
            html!("div", {
                .class(["flex-1", "flex", "flex-col", "items-center", "justify-center", "p-4"])
                .child(html!("div", {
                    .class(["card", "w-full", "max-w-md", "bg-base-100", "shadow-xl", "animate-rise"])
                    .class_signal("animate-shake", form.shake.signal())
                    .children(&mut [
                        html!("div", {
                            .class("card-body")
                            .child(header.render())
                            .apply(|dom| body.into_iter().fold(dom, |dom, child| dom.child(child)))
                        })
                    ])
                }))
                .apply(|dom| match footer {
                    Some(footer) => dom.child(footer),
                    None => dom,
                })
            })
        ])
    })
}

/// Legal links under the card.
pub fn legal_footer(action: &'static str) -> Dom {
    html!("p", {
        .class(["text-xs", "text-center", "text-base-content/60", "mt-8"])
        .children(&mut [
            html!("span", {
                .text(&format!("By {}, you agree to our ", action))
            }),
            html!("a", {
                .class("link")
                .attribute("href", "/terms")
                .text("Terms of Service")
            }),
            html!("span", {
                .text(" and ")
            }),
            html!("a", {
                .class("link")
                .attribute("href", "/privacy")
                .text("Privacy Policy")
            }),
        ])
    })
}
