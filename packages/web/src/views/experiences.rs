use dioxus::prelude::*;

#[component]
pub fn Experiences() -> Element {
    rsx! {
        section {
            class: "page",
            h1 { "Experiences" }
            p { "Your professional experiences will be managed here." }
        }
    }
}
