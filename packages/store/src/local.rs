//! localStorage-backed credential store for the web platform.
//!
//! All methods silently swallow storage failures (a blocked or unavailable
//! localStorage degrades to "no stored session" rather than crashing the
//! client); the authoritative session always lives on the server side of
//! the bearer token.

use web_sys::Storage;

use crate::credentials::{CredentialStore, RawCredentials, TOKEN_EXPIRY_KEY, TOKEN_KEY, USER_KEY};

/// Browser localStorage CredentialStore.
///
/// Zero-size handle; the browser scopes the underlying storage to the
/// origin, so every instance observes the same three entries.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn get_item(storage: &Storage, key: &str) -> Option<String> {
        storage.get_item(key).ok().flatten()
    }
}

impl CredentialStore for LocalStore {
    fn read_all(&self) -> Option<RawCredentials> {
        let storage = Self::storage()?;
        let token = Self::get_item(&storage, TOKEN_KEY)?;
        let user_json = Self::get_item(&storage, USER_KEY)?;
        let expires_at = Self::get_item(&storage, TOKEN_EXPIRY_KEY);
        Some(RawCredentials {
            token,
            user_json,
            expires_at,
        })
    }

    fn write(&self, credentials: &RawCredentials) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &credentials.token);
        let _ = storage.set_item(USER_KEY, &credentials.user_json);
        match &credentials.expires_at {
            Some(expiry) => {
                let _ = storage.set_item(TOKEN_EXPIRY_KEY, expiry);
            }
            None => {
                let _ = storage.remove_item(TOKEN_EXPIRY_KEY);
            }
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
        let _ = storage.remove_item(TOKEN_EXPIRY_KEY);
    }
}
