//! Catch-all 404 page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "hero",
            h1 { class: "hero__title", "404 - Page not found" }
            p {
                class: "hero__tagline",
                "The page {path} does not exist or has been moved."
            }
            div {
                class: "hero__actions",
                Link { class: "btn btn--primary", to: Route::Home {}, "Back to the home page" }
            }
        }
    }
}
