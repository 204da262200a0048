//! Route guards: the two gates between session state and the route table.
//!
//! Both are pure functions of the current [`api::Session`] snapshot,
//! mounted as router layouts. `RequireAuth` also plays the role of the
//! authenticated shell (navbar plus content area), and `GuestOnly` renders
//! the centered card the auth forms sit in.

use dioxus::prelude::*;

use ui::components::LoadingView;
use ui::{use_session, Navbar};

use crate::Route;

/// Gate for protected routes.
///
/// While the session is unresolved this renders a placeholder instead of
/// redirecting, so a stored session is never bounced to the login page by a
/// redirect racing the storage read. Once resolved: anonymous visitors are
/// sent to the login route, authenticated ones get the app shell.
#[component]
pub fn RequireAuth() -> Element {
    let session = use_session();
    let state = session.current();
    let nav = use_navigator();

    if !state.is_resolved() {
        return rsx! {
            LoadingView { message: "Checking authentication\u{2026}" }
        };
    }

    if !state.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "app-shell",
            Navbar {}
            main { class: "app-shell__content", Outlet::<Route> {} }
        }
    }
}

/// Gate for the login and register pages.
///
/// Blocks on an unresolved session rather than optimistically rendering the
/// form, so an already-signed-in user never sees a login form flash before
/// the redirect. Authenticated visitors go straight to the dashboard.
#[component]
pub fn GuestOnly() -> Element {
    let session = use_session();
    let state = session.current();
    let nav = use_navigator();

    if !state.is_resolved() {
        return rsx! {
            LoadingView {}
        };
    }

    if state.is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "auth-layout",
            div { class: "auth-layout__card", Outlet::<Route> {} }
        }
    }
}
