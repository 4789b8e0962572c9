use std::sync::Arc;

use ck_blogsite_core::{Field, FormSubmission};
use dominator::{clone, events, html, with_node, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use super::submit_in_background;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    /// Multi-line text; Enter inserts a newline instead of submitting.
    TextArea,
}

impl InputKind {
    fn input_type(&self, revealed: bool) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Password if !revealed => "password",
            _ => "text",
        }
    }
}

/// Labelled input bound to one field of a form, with its inline error underneath.
pub struct FieldInput {
    pub form: Arc<FormSubmission>,
    pub field: Field,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    pub clear_error_on_edit: bool,
}

impl FieldInput {
    pub fn new(form: &Arc<FormSubmission>, field: Field, label: &'static str) -> Self {
        Self {
            form: form.clone(),
            field,
            label,
            placeholder: "",
            kind: InputKind::Text,
            clear_error_on_edit: false,
        }
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Drop this field's error as soon as the user edits it.
    pub fn clearing_errors(mut self) -> Self {
        self.clear_error_on_edit = true;
        self
    }

    pub fn render(self) -> Dom {
        let state = Arc::new(self);
        let field = state.field;

        html!("div", {
            .class(["form-control", "w-full", "mt-2"])
            .children(&mut [
                html!("label", {
                    .class("label")
                    .attribute("for", field.as_str())
                    .children(&mut [
                        html!("span", {
                            .class("label-text")
                            .text(state.label)
                        })
                    ])
                }),
                html!("div", {
                    .class("relative")
                    .child(match state.kind {
                        InputKind::TextArea => Self::render_text_area(&state),
                        _ => Self::render_input(&state),
                    })
                }),
                html!("div", {
                    .child_signal(state.form.error_signal(field).map(|message| {
                        message.map(|message| {
                            html!("p", {
                                .class(["text-sm", "text-error", "mt-1"])
                                .text(&message)
                            })
                        })
                    }))
                }),
            ])
        })
    }

    fn on_edit(state: &Arc<Self>, value: String) {
        state.form.field(state.field).set_neq(value);
        if state.clear_error_on_edit {
            state.form.clear_error(state.field);
        }
    }

    fn render_input(state: &Arc<Self>) -> Dom {
        let field = state.field;
        let kind = state.kind;
        let revealed = Mutable::new(false);

        html!("div", {
            .children(&mut [
                html!("input" => HtmlInputElement, {
                    .class(["input", "input-bordered", "w-full"])
                    .class_signal("input-error", state.form.errors.signal_ref(move |errors| errors.contains(field)))
                    .attribute("id", field.as_str())
                    .attribute("name", field.as_str())
                    .attribute("placeholder", state.placeholder)
                    .attribute_signal("type", revealed.signal().map(move |revealed| kind.input_type(revealed)))
                    .property_signal("value", state.form.field(field).signal_cloned())
                    .with_node!(input => {
                        .event(clone!(state => move |_: events::Input| {
                            Self::on_edit(&state, input.value());
                        }))
                    })
                    .event(clone!(state => move |e: events::KeyDown| {
                        if e.key() == "Enter" {
                            submit_in_background(&state.form);
                        }
                    }))
                }),
            ])
            .apply_if(kind == InputKind::Password, |dom| {
                dom.child(html!("button", {
                    .class(["btn", "btn-ghost", "btn-xs", "absolute", "right-2", "top-2"])
                    .attribute("type", "button")
                    .text_signal(revealed.signal().map(|revealed| if revealed { "Hide" } else { "Show" }))
                    .event(clone!(revealed => move |_: events::Click| {
                        revealed.set(!revealed.get());
                    }))
                }))
            })
        })
    }

    fn render_text_area(state: &Arc<Self>) -> Dom {
        let field = state.field;

        html!("textarea" => HtmlTextAreaElement, {
            .class(["textarea", "textarea-bordered", "w-full", "min-h-[200px]"])
            .class_signal("textarea-error", state.form.errors.signal_ref(move |errors| errors.contains(field)))
            .attribute("id", field.as_str())
            .attribute("name", field.as_str())
            .attribute("placeholder", state.placeholder)
            .property_signal("value", state.form.field(field).signal_cloned())
            .with_node!(area => {
                .event(clone!(state => move |_: events::Input| {
                    Self::on_edit(&state, area.value());
                }))
            })
        })
    }
}
