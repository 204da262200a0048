//! Public landing page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "hero",
            h1 { class: "hero__title", "Welcome to CareerFlow" }
            p {
                class: "hero__tagline",
                "Organize, analyze and plan your professional career"
            }
            div {
                class: "hero__actions",
                Link { class: "btn btn--primary", to: Route::Login {}, "Sign in" }
                Link { class: "btn btn--secondary", to: Route::Register {}, "Sign up" }
            }
        }
    }
}
