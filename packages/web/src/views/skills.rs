use dioxus::prelude::*;

#[component]
pub fn Skills() -> Element {
    rsx! {
        section {
            class: "page",
            h1 { "Skills" }
            p { "Your skills will be managed here." }
        }
    }
}
