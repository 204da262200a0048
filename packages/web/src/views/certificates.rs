use dioxus::prelude::*;

#[component]
pub fn Certificates() -> Element {
    rsx! {
        section {
            class: "page",
            h1 { "Certificates" }
            p { "Your certificates will be managed here." }
        }
    }
}
