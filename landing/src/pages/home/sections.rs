use std::sync::Arc;

use ck_blogsite_core::Route;
use dominator::{html, Dom};

use super::state::HomeState;

struct Stat {
    number: &'static str,
    label: &'static str,
}

struct Feature {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
}

struct CoreFeature {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
    detail: &'static str,
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
}

const STATS: &[Stat] = &[
    Stat { number: "50K+", label: "Active Writers" },
    Stat { number: "500K+", label: "Stories Published" },
    Stat { number: "2M+", label: "Monthly Readers" },
    Stat { number: "98%", label: "User Satisfaction" },
];

const FEATURES: &[Feature] = &[
    Feature {
        glyph: "⚡",
        title: "Lightning Fast",
        description: "Optimized for speed with instant publishing and real-time collaboration.",
    },
    Feature {
        glyph: "🛡",
        title: "Secure & Private",
        description: "Your content is protected with enterprise-grade security and privacy controls.",
    },
    Feature {
        glyph: "📈",
        title: "Analytics Insights",
        description: "Track your readership, engagement, and grow your audience with detailed analytics.",
    },
    Feature {
        glyph: "💬",
        title: "Community Driven",
        description: "Connect with readers through comments, discussions, and collaborative features.",
    },
];

const CORE_FEATURES: &[CoreFeature] = &[
    CoreFeature {
        glyph: "✍",
        title: "Write",
        description: "Create and publish your stories with our intuitive, distraction-free editor designed specifically for writers who care about craft.",
        detail: "Autosave every 10 seconds",
    },
    CoreFeature {
        glyph: "📖",
        title: "Read",
        description: "Discover engaging, thought-provoking content from talented writers worldwide. Curated feeds ensure you never miss great stories.",
        detail: "Personalized recommendations",
    },
    CoreFeature {
        glyph: "👥",
        title: "Connect",
        description: "Join a vibrant community of passionate readers and writers. Build meaningful connections through shared stories and experiences.",
        detail: "Active community discussions",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Chen",
        role: "Travel Writer",
        content: "CK Blogsite transformed how I share my adventures. The community here is incredible!",
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "Tech Blogger",
        content: "Clean interface, powerful features. Perfect platform for serious writers.",
    },
    Testimonial {
        name: "Emma Thompson",
        role: "Food Critic",
        content: "I've found my writing home. The engagement from readers is phenomenal.",
    },
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

fn section_heading(title: &str, subtitle: &str) -> Dom {
    html!("div", {
        .class(["text-center", "mb-16"])
        .children(&mut [
            html!("h2", {
                .class(["text-4xl", "md:text-5xl", "font-bold", "mb-6"])
                .text(title)
            }),
            html!("p", {
                .class(["text-xl", "text-base-content/70", "max-w-3xl", "mx-auto", "font-light"])
                .text(subtitle)
            }),
        ])
    })
}

/// Fades in once the splash has gone.
fn reveal(state: &Arc<HomeState>, dom: Dom) -> Dom {
    html!("div", {
        .class(["transition-all", "duration-1000"])
        .class_signal(["opacity-0", "translate-y-8"], state.hidden_signal())
        .child(dom)
    })
}

/// Blurred shapes drifting behind the page as it scrolls.
pub fn backdrop(state: &Arc<HomeState>) -> Dom {
    html!("div", {
        .class(["fixed", "inset-0", "pointer-events-none", "-z-0"])
        .children(&mut [
            html!("div", {
                .class(["absolute", "-top-32", "-left-32", "w-96", "h-96", "rounded-full", "bg-neutral/10", "blur-3xl"])
                .style_signal("transform", state.parallax(-0.2))
            }),
            html!("div", {
                .class(["absolute", "top-1/3", "right-0", "w-80", "h-80", "rounded-full", "bg-neutral/5", "blur-3xl"])
                .style_signal("transform", state.drift(0.1, -0.3))
            }),
            html!("div", {
                .class(["absolute", "bottom-0", "left-1/4", "w-72", "h-72", "rounded-full", "bg-neutral/10", "blur-2xl"])
                .style_signal("transform", state.parallax(0.15))
            }),
            html!("div", {
                .class(["absolute", "inset-0"])
                .style_signal("background-color", state.overlay())
            }),
        ])
    })
}

pub fn hero(state: &Arc<HomeState>) -> Dom {
    let app = &state.app;

    html!("section", {
        .class(["min-h-screen", "flex", "items-center", "justify-center", "px-4"])
        .child(reveal(state, html!("div", {
            .class(["text-center", "max-w-5xl", "backdrop-blur-sm", "bg-white/10", "rounded-3xl", "p-8", "border", "border-white/20"])
            .children(&mut [
                html!("div", {
                    .class(["badge", "badge-lg", "badge-outline", "mb-8"])
                    .text("Trusted by 50,000+ writers worldwide")
                }),
                html!("h1", {
                    .class(["text-5xl", "md:text-8xl", "font-bold", "mb-8", "tracking-tight"])
                    .text("CK Blogsite")
                }),
                html!("p", {
                    .class(["text-xl", "md:text-2xl", "mb-12", "font-light", "text-base-content/80"])
                    .text("A simple, elegant platform for writers and readers to share stories, build communities, and inspire each other through the power of words.")
                }),
                html!("div", {
                    .class(["flex", "flex-col", "sm:flex-row", "gap-4", "justify-center", "mb-12"])
                    .children(&mut [
                        html!("a", {
                            .class(["btn", "btn-neutral", "btn-lg"])
                            .text("Start Writing Today →")
                            .apply(app.router.link(Route::Signup))
                        }),
                        html!("a", {
                            .class(["btn", "btn-outline", "btn-lg"])
                            .text("Sign In")
                            .apply(app.router.link(Route::Login))
                        }),
                    ])
                }),
                html!("div", {
                    .class(["flex", "justify-center", "items-center", "gap-6", "opacity-70", "text-sm"])
                    .children(&mut [
                        html!("span", { .text("★★★★★ 4.9/5 rating") }),
                        html!("span", { .text("Loved by creators") }),
                    ])
                }),
            ])
        })))
    })
}

pub fn stats(state: &Arc<HomeState>) -> Dom {
    html!("section", {
        .class(["py-16", "px-4"])
        .child(reveal(state, html!("div", {
            .class(["stats", "stats-vertical", "md:stats-horizontal", "shadow", "w-full", "max-w-5xl", "mx-auto", "flex"])
            .apply(|dom| STATS.iter().fold(dom, |dom, stat| {
                dom.child(html!("div", {
                    .class(["stat", "place-items-center"])
                    .children(&mut [
                        html!("div", {
                            .class(["stat-value"])
                            .text(stat.number)
                        }),
                        html!("div", {
                            .class(["stat-desc", "font-medium"])
                            .text(stat.label)
                        }),
                    ])
                }))
            }))
        })))
    })
}

pub fn core_features(state: &Arc<HomeState>) -> Dom {
    html!("section", {
        .class(["py-24", "px-4", "max-w-6xl", "mx-auto"])
        .children(&mut [
            section_heading(
                "Why Writers Choose Us",
                "Everything you need to write, publish, and grow your audience in one beautiful platform.",
            ),
            reveal(state, html!("div", {
                .class(["grid", "md:grid-cols-3", "gap-8"])
                .apply(|dom| CORE_FEATURES.iter().fold(dom, |dom, feature| {
                    dom.child(html!("div", {
                        .class(["card", "bg-base-100", "shadow-lg", "hover:-translate-y-2", "transition-transform"])
                        .child(html!("div", {
                            .class(["card-body"])
                            .children(&mut [
                                html!("div", {
                                    .class(["text-4xl", "mb-4"])
                                    .text(feature.glyph)
                                }),
                                html!("h3", {
                                    .class(["card-title", "text-2xl"])
                                    .text(feature.title)
                                }),
                                html!("p", {
                                    .class(["text-base-content/70", "leading-relaxed"])
                                    .text(feature.description)
                                }),
                                html!("p", {
                                    .class(["text-sm", "font-medium", "mt-4"])
                                    .text(feature.detail)
                                }),
                            ])
                        }))
                    }))
                }))
            })),
        ])
    })
}

pub fn features(state: &Arc<HomeState>) -> Dom {
    html!("section", {
        .class(["py-24", "px-4", "bg-base-100/60"])
        .children(&mut [
            section_heading(
                "Powerful Features for Modern Writers",
                "Professional tools that help you focus on what matters most - your writing.",
            ),
            reveal(state, html!("div", {
                .class(["grid", "md:grid-cols-2", "lg:grid-cols-4", "gap-6", "max-w-6xl", "mx-auto"])
                .apply(|dom| FEATURES.iter().fold(dom, |dom, feature| {
                    dom.child(html!("div", {
                        .class(["p-6", "rounded-2xl", "bg-base-100", "shadow", "text-center"])
                        .children(&mut [
                            html!("div", {
                                .class(["text-3xl", "mb-4"])
                                .text(feature.glyph)
                            }),
                            html!("h3", {
                                .class(["text-lg", "font-semibold", "mb-2"])
                                .text(feature.title)
                            }),
                            html!("p", {
                                .class(["text-sm", "text-base-content/70"])
                                .text(feature.description)
                            }),
                        ])
                    }))
                }))
            })),
        ])
    })
}

pub fn testimonials(state: &Arc<HomeState>) -> Dom {
    html!("section", {
        .class(["py-24", "px-4", "max-w-6xl", "mx-auto"])
        .children(&mut [
            section_heading(
                "What Writers Say",
                "Join thousands of writers who've made CK Blogsite their creative home.",
            ),
            reveal(state, html!("div", {
                .class(["grid", "md:grid-cols-3", "gap-8"])
                .apply(|dom| TESTIMONIALS.iter().fold(dom, |dom, testimonial| {
                    dom.child(html!("figure", {
                        .class(["card", "bg-base-100", "shadow", "p-6"])
                        .children(&mut [
                            html!("blockquote", {
                                .class(["italic", "mb-6", "text-base-content/80"])
                                .text(&format!("\"{}\"", testimonial.content))
                            }),
                            html!("figcaption", {
                                .class(["flex", "items-center", "gap-3"])
                                .children(&mut [
                                    html!("div", {
                                        .class(["w-10", "h-10", "rounded-full", "bg-neutral", "text-neutral-content", "flex", "items-center", "justify-center", "font-semibold"])
                                        .text(&initials(testimonial.name))
                                    }),
                                    html!("div", {
                                        .children(&mut [
                                            html!("div", {
                                                .class("font-semibold")
                                                .text(testimonial.name)
                                            }),
                                            html!("div", {
                                                .class(["text-sm", "text-base-content/60"])
                                                .text(testimonial.role)
                                            }),
                                        ])
                                    }),
                                ])
                            }),
                        ])
                    }))
                }))
            })),
        ])
    })
}

pub fn call_to_action(state: &Arc<HomeState>) -> Dom {
    let app = &state.app;

    html!("section", {
        .class(["py-24", "px-4", "bg-neutral", "text-neutral-content", "text-center"])
        .children(&mut [
            html!("h2", {
                .class(["text-4xl", "md:text-5xl", "font-bold", "mb-6"])
                .text("Ready to Start Your Writing Journey?")
            }),
            html!("p", {
                .class(["text-xl", "mb-10", "opacity-80", "max-w-2xl", "mx-auto"])
                .text("Join thousands of writers who trust CK Blogsite to share their stories with the world.")
            }),
            html!("a", {
                .class(["btn", "btn-lg"])
                .text("Start Writing Today")
                .apply(app.router.link(Route::Signup))
            }),
            html!("p", {
                .class(["mt-6", "text-sm", "opacity-70"])
                .children(&mut [
                    html!("span", { .text("Already have an account? ") }),
                    html!("a", {
                        .class(["link", "font-medium"])
                        .text("Sign in")
                        .apply(app.router.link(Route::Login))
                    }),
                ])
            }),
        ])
    })
}

pub fn quick_links(state: &Arc<HomeState>) -> Dom {
    let app = &state.app;

    html!("footer", {
        .class(["footer", "footer-center", "p-10", "bg-base-100"])
        .children(&mut [
            html!("nav", {
                .class(["grid", "grid-flow-col", "gap-4"])
                .children(&mut [
                    html!("a", {
                        .class(["btn", "btn-outline"])
                        .text("Go to Dashboard")
                        .apply(app.router.link(Route::Dashboard))
                    }),
                    html!("a", {
                        .class(["btn", "btn-outline"])
                        .text("Browse Blogs")
                        .apply(app.router.link(Route::BlogList))
                    }),
                ])
            }),
            html!("p", {
                .class(["text-sm", "text-base-content/60"])
                .text("© CK Blogsite")
            }),
        ])
    })
}
