//! Dashboard landing for signed-in users.

use dioxus::prelude::*;

use ui::{format, use_session};

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let state = session.current();
    let greeting = state.user().map(|user| {
        (
            user.display_name().to_string(),
            format::format_date(&user.created_at),
        )
    });

    rsx! {
        section {
            class: "page",
            h1 { "Dashboard" }
            if let Some((name, member_since)) = greeting {
                p { class: "page__subtitle", "Welcome back, {name}." }
                p { class: "page__hint", "Member since {member_since}" }
            }
            p { "Your career overview will appear here." }
        }
    }
}
