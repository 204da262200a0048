//! Profile page: the signed-in user's snapshot from login time.

use dioxus::prelude::*;

use ui::{format, use_session};

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let state = session.current();
    let details = state.user().map(|user| {
        let location = match (user.city.as_deref(), user.state.as_deref()) {
            (Some(city), Some(uf)) => format!("{city}, {uf}"),
            (Some(city), None) => city.to_string(),
            (None, Some(uf)) => uf.to_string(),
            (None, None) => "\u{2014}".to_string(),
        };
        (
            user.name.clone(),
            user.email.clone(),
            user.phone
                .as_deref()
                .map(format::format_phone)
                .unwrap_or_else(|| "\u{2014}".to_string()),
            location,
        )
    });

    rsx! {
        section {
            class: "page",
            h1 { "Profile" }
            if let Some((name, email, phone, location)) = details {
                dl {
                    class: "profile-details",
                    dt { "Name" }
                    dd { "{name}" }
                    dt { "Email" }
                    dd { "{email}" }
                    dt { "Phone" }
                    dd { "{phone}" }
                    dt { "Location" }
                    dd { "{location}" }
                }
            }
            p { class: "page__hint", "Profile editing will be implemented here." }
        }
    }
}
