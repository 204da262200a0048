//! Small shared form components.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Danger => "btn btn--danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    let button_type = r#type;
    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: "{button_type}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            class: "input {class}",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Inline form-level alert with an optional dismiss affordance.
#[component]
pub fn Alert(
    #[props(default = "error".to_string())] severity: String,
    ondismiss: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "alert alert--{severity}",
            role: "alert",
            div { class: "alert__message", {children} }
            if let Some(handler) = ondismiss {
                button {
                    class: "alert__dismiss",
                    r#type: "button",
                    onclick: move |evt| handler.call(evt),
                    "\u{d7}"
                }
            }
        }
    }
}

/// Full-area placeholder shown while session state is settling.
#[component]
pub fn LoadingView(#[props(default = "Loading\u{2026}".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "loading-view",
            div { class: "loading-view__spinner" }
            p { class: "loading-view__message", "{message}" }
        }
    }
}
