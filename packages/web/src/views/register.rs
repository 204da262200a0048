//! Registration page view.
//!
//! Registration does not log the user in; a created account lands back on
//! the login form.

use dioxus::prelude::*;

use api::RegisterRequest;
use ui::components::{Alert, Button, ButtonVariant, Input};
use ui::{format, use_session};

use crate::Route;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut state_field = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let state = session.current();
    let submitting = state.is_loading();
    let error = form_error().or_else(|| state.error().map(str::to_string));

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);
            session.clear_error();

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if n.is_empty() {
                form_error.set(Some("Name is required".to_string()));
                return;
            }
            if !format::is_valid_email(&e) {
                form_error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if !format::is_valid_password(&p) {
                form_error.set(Some(
                    "Password must be at least 6 characters".to_string(),
                ));
                return;
            }
            if p != confirm_password() {
                form_error.set(Some("Passwords do not match".to_string()));
                return;
            }

            // Best-effort availability probe; the service still enforces
            // uniqueness on submit.
            if session.check_email(&e).await {
                form_error.set(Some(
                    "An account with this email already exists".to_string(),
                ));
                return;
            }

            let result = session
                .register(RegisterRequest {
                    name: n,
                    email: e,
                    password: p,
                    phone: optional(phone()),
                    city: optional(city()),
                    state: optional(state_field()),
                })
                .await;
            if result.is_ok() {
                nav.replace(Route::Login {});
            }
        });
    };

    rsx! {
        h1 { class: "auth-form__title", "Create account" }
        p { class: "auth-form__subtitle", "Sign up for CareerFlow" }

        form {
            class: "auth-form",
            onsubmit: handle_register,

            if let Some(message) = error {
                Alert {
                    ondismiss: move |_| {
                        form_error.set(None);
                        session.clear_error();
                    },
                    "{message}"
                }
            }

            Input {
                placeholder: "Name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }

            Input {
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            Input {
                r#type: "tel",
                placeholder: "Phone (optional)",
                value: phone(),
                oninput: move |evt: FormEvent| phone.set(evt.value()),
            }

            div {
                class: "auth-form__row",
                Input {
                    placeholder: "City (optional)",
                    value: city(),
                    oninput: move |evt: FormEvent| city.set(evt.value()),
                }
                Input {
                    placeholder: "State (optional)",
                    value: state_field(),
                    oninput: move |evt: FormEvent| state_field.set(evt.value()),
                }
            }

            Input {
                r#type: "password",
                placeholder: "Password (min 6 characters)",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            Input {
                r#type: "password",
                placeholder: "Confirm password",
                value: confirm_password(),
                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: submitting,
                if submitting { "Creating account\u{2026}" } else { "Sign up" }
            }
        }

        p {
            class: "auth-form__footer",
            "Already have an account? "
            Link { to: Route::Login {}, "Sign in" }
        }
    }
}
