//! Hard browser navigation, bypassing the client-side router.
//!
//! Logout and unauthorized-response eviction intentionally reload the whole
//! document instead of pushing a route: a full load drops any stale
//! in-memory state the rest of the UI may still hold.

/// Application root, the post-logout destination.
pub const ROOT: &str = "/";
/// Login route, the post-eviction destination.
pub const LOGIN_ROUTE: &str = "/login";

#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static LAST_REDIRECT: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Navigate the browser to `path` with a full document load.
///
/// Outside a browser (tests, headless shells) there is nothing to navigate,
/// so the request is recorded instead and exposed via [`last_redirect`].
pub fn hard_redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(path, "hard redirect requested outside a browser");
        LAST_REDIRECT.with(|slot| *slot.borrow_mut() = Some(path.to_string()));
    }
}

/// The most recent [`hard_redirect`] target on this thread, if any.
#[cfg(not(target_arch = "wasm32"))]
pub fn last_redirect() -> Option<String> {
    LAST_REDIRECT.with(|slot| slot.borrow().clone())
}
