use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::credentials::{CredentialStore, RawCredentials, TOKEN_EXPIRY_KEY, TOKEN_KEY, USER_KEY};

/// In-memory CredentialStore for testing and native fallback.
///
/// Mirrors the localStorage surface: three independent string entries keyed
/// the same way the browser store keys them, so tests can poke partial or
/// corrupt states exactly as they could occur in a real origin.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single raw entry, bypassing the triple contract.
    ///
    /// Test-surface parity with `localStorage.setItem`; production code goes
    /// through [`CredentialStore::write`].
    pub fn set_item(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Read a single raw entry, `localStorage.getItem`-style.
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl CredentialStore for MemoryStore {
    fn read_all(&self) -> Option<RawCredentials> {
        let entries = self.entries.lock().unwrap();
        let token = entries.get(TOKEN_KEY)?.clone();
        let user_json = entries.get(USER_KEY)?.clone();
        let expires_at = entries.get(TOKEN_EXPIRY_KEY).cloned();
        Some(RawCredentials {
            token,
            user_json,
            expires_at,
        })
    }

    fn write(&self, credentials: &RawCredentials) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(TOKEN_KEY.to_string(), credentials.token.clone());
        entries.insert(USER_KEY.to_string(), credentials.user_json.clone());
        match &credentials.expires_at {
            Some(expiry) => entries.insert(TOKEN_EXPIRY_KEY.to_string(), expiry.clone()),
            None => entries.remove(TOKEN_EXPIRY_KEY),
        };
    }

    fn clear(&self) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);
        entries.remove(TOKEN_EXPIRY_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawCredentials {
        RawCredentials {
            token: "tok123".to_string(),
            user_json: r#"{"id":"u1"}"#.to_string(),
            expires_at: Some("2025-01-01T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_write_then_read_all() {
        let store = MemoryStore::new();
        assert!(store.read_all().is_none());

        store.write(&sample());
        assert_eq!(store.read_all(), Some(sample()));
        assert_eq!(store.token().as_deref(), Some("tok123"));
    }

    #[test]
    fn test_read_all_requires_both_token_and_user() {
        let store = MemoryStore::new();
        store.set_item(TOKEN_KEY, "tok123");
        assert!(store.read_all().is_none());
        assert!(store.token().is_none());

        let store = MemoryStore::new();
        store.set_item(USER_KEY, r#"{"id":"u1"}"#);
        assert!(store.read_all().is_none());
    }

    #[test]
    fn test_expiry_is_optional() {
        let store = MemoryStore::new();
        store.write(&RawCredentials {
            expires_at: None,
            ..sample()
        });
        let read = store.read_all().unwrap();
        assert_eq!(read.expires_at, None);
    }

    #[test]
    fn test_write_replaces_stale_expiry() {
        let store = MemoryStore::new();
        store.write(&sample());
        store.write(&RawCredentials {
            expires_at: None,
            ..sample()
        });
        assert_eq!(store.read_all().unwrap().expires_at, None);
    }

    #[test]
    fn test_clear_removes_everything_and_is_idempotent() {
        let store = MemoryStore::new();
        store.write(&sample());

        store.clear();
        assert!(store.read_all().is_none());
        assert!(store.get_item(TOKEN_EXPIRY_KEY).is_none());

        // Clearing an already-empty store is not an error.
        store.clear();
        assert!(store.read_all().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let alias = store.clone();
        store.write(&sample());
        assert_eq!(alias.read_all(), Some(sample()));
    }
}
