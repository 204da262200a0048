use dioxus::prelude::*;

#[component]
pub fn Languages() -> Element {
    rsx! {
        section {
            class: "page",
            h1 { "Languages" }
            p { "Your languages will be managed here." }
        }
    }
}
