//! Login page view with the email/password form.

use dioxus::prelude::*;

use api::LoginRequest;
use ui::components::{Alert, Button, ButtonVariant, Input};
use ui::{format, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let state = session.current();
    let submitting = state.is_loading();
    // Client-side validation failures and service failures share one slot.
    let error = form_error().or_else(|| state.error().map(str::to_string));

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);
            session.clear_error();

            let e = email().trim().to_string();
            let p = password();

            if !format::is_valid_email(&e) {
                form_error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                form_error.set(Some("Please enter your password".to_string()));
                return;
            }

            let result = session
                .login(LoginRequest {
                    email: e,
                    password: p,
                })
                .await;
            if result.is_ok() {
                nav.replace(Route::Dashboard {});
            }
            // On failure the session carries the message; stay on the page.
        });
    };

    rsx! {
        h1 { class: "auth-form__title", "Sign in" }
        p { class: "auth-form__subtitle", "Welcome back to CareerFlow" }

        form {
            class: "auth-form",
            onsubmit: handle_login,

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
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            Input {
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: submitting,
                if submitting { "Signing in\u{2026}" } else { "Sign in" }
            }
        }

        p {
            class: "auth-form__footer",
            "Don't have an account? "
            Link { to: Route::Register {}, "Sign up" }
        }
    }
}
