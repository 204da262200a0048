//! Top navigation bar for the authenticated shell.

use dioxus::prelude::*;

use crate::auth::use_session;
use crate::format;

const SECTIONS: [(&str, &str); 6] = [
    ("/dashboard", "Dashboard"),
    ("/profile", "Profile"),
    ("/skills", "Skills"),
    ("/languages", "Languages"),
    ("/certificates", "Certificates"),
    ("/experiences", "Experiences"),
];

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let state = session.current();
    let identity = state.user().map(|user| {
        let name = user.display_name().to_string();
        (format::initials(&name), name)
    });

    rsx! {
        header {
            class: "navbar",
            a { class: "navbar__brand", href: "/dashboard", "CareerFlow" }
            nav {
                class: "navbar__links",
                for (href, label) in SECTIONS {
                    a { href, "{label}" }
                }
            }
            if let Some((avatar, name)) = identity {
                div {
                    class: "navbar__identity",
                    span { class: "navbar__avatar", title: "{name}", "{avatar}" }
                    span { class: "navbar__name", "{name}" }
                    button {
                        class: "navbar__logout",
                        r#type: "button",
                        onclick: move |_| session.logout(),
                        "Sign out"
                    }
                }
            }
        }
    }
}
