//! Durable credential storage for the CareerFlow client.
//!
//! Holds the three origin-scoped entries that survive a page reload: the
//! bearer token, the serialized user snapshot, and the optional expiry
//! timestamp. The session layer owns what goes into them; this crate only
//! guarantees that a reader never observes one half of a session without
//! the other.

mod credentials;
pub use credentials::{CredentialStore, RawCredentials, TOKEN_EXPIRY_KEY, TOKEN_KEY, USER_KEY};

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

/// The credential store used on the current platform.
///
/// - **Web** (WASM + `web` feature): browser localStorage via [`LocalStore`]
/// - **Native** (tests, headless shells): a process-wide [`MemoryStore`]
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = MemoryStore;

/// Create the platform-appropriate credential store.
///
/// On the web this opens localStorage, which the browser already treats as a
/// per-origin singleton, so constructing a fresh handle per call is free. On
/// native targets a single shared [`MemoryStore`] is lazily created so every
/// caller in the process observes the same credentials.
pub fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static SHARED: OnceLock<MemoryStore> = OnceLock::new();
        SHARED.get_or_init(MemoryStore::new).clone()
    }
}
