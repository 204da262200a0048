//! # Session state machine
//!
//! The single source of truth for "is there a logged-in user". [`Session`]
//! is the in-memory record plus its transition rules; [`SessionManager`] is
//! the owning driver that wires a [`CredentialStore`] and an [`AuthApi`]
//! to those transitions. The Dioxus layer drives the same transitions
//! through a signal, so the state machine has exactly one implementation.
//!
//! States: *unresolved* (before the one-shot storage read) → *anonymous* or
//! *authenticated*, then back to *anonymous* on logout or eviction. The two
//! identity fields move together: at every observation point
//! `token.is_some() == user.is_some()`.
//!
//! The stored expiry timestamp is persisted and restored but never checked
//! against the clock; it is inert metadata.

use store::{CredentialStore, RawCredentials};

use crate::auth::AuthApi;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, User};
use crate::navigation;

/// Clear the persisted credential triple.
///
/// The one shared eviction path: [`SessionManager::logout`] and the HTTP
/// client's unauthorized handler both go through here, so the two ways a
/// session can end can never disagree about what "cleared" means.
/// Idempotent, like the store contract underneath it.
pub fn evict_session<S: CredentialStore>(store: &S) {
    store.clear();
}

/// The in-memory session record.
///
/// Fields are private; every mutation goes through a named transition so
/// the token/user pairing invariant holds at each observation point.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    loading: bool,
    resolved: bool,
    error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::unresolved()
    }
}

impl Session {
    /// Initial state, before the storage read has happened.
    pub fn unresolved() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
            resolved: false,
            error: None,
        }
    }

    /// Resolved state with no credentials.
    pub fn anonymous() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
            resolved: true,
            error: None,
        }
    }

    /// One-shot hydration from the credential store.
    ///
    /// Synchronous and network-free. Restores the session only when the
    /// stored triple is complete and the user snapshot deserializes; a
    /// malformed record fails closed: it is discarded from the store and
    /// the session comes up anonymous, never as an error the user sees.
    pub fn restore<S: CredentialStore>(store: &S) -> Self {
        let Some(raw) = store.read_all() else {
            return Self::anonymous();
        };
        match serde_json::from_str::<User>(&raw.user_json) {
            Ok(user) => Self {
                token: Some(raw.token),
                user: Some(user),
                loading: false,
                resolved: true,
                error: None,
            },
            Err(error) => {
                tracing::warn!(%error, "discarding malformed stored session");
                evict_session(store);
                Self::anonymous()
            }
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True during the initial storage read and while a login or register
    /// call is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// False only before the one-shot storage read has completed.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// A login or register call is leaving: mark in-flight, drop the
    /// previous attempt's error.
    pub fn begin_attempt(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Login succeeded: persist the triple, then flip to authenticated.
    ///
    /// The store write happens before the in-memory flip so the very next
    /// outbound request already carries the new token.
    pub fn complete_login<S: CredentialStore>(&mut self, store: &S, response: AuthResponse) {
        match serde_json::to_string(&response.user) {
            Ok(user_json) => store.write(&RawCredentials {
                token: response.token.clone(),
                user_json,
                expires_at: response.expires_at.map(|expiry| expiry.to_rfc3339()),
            }),
            Err(error) => tracing::warn!(%error, "failed to persist session"),
        }
        self.token = Some(response.token);
        self.user = Some(response.user);
        self.loading = false;
        self.resolved = true;
        self.error = None;
    }

    /// Registration succeeded. No credentials change hands; the user still
    /// has to log in.
    pub fn complete_register(&mut self) {
        self.loading = false;
    }

    /// A login or register call failed. The identity fields are left
    /// untouched: a rejected re-login does not log anyone out.
    pub fn fail_attempt(&mut self, error: &ApiError) {
        self.loading = false;
        self.error = Some(error.to_string());
    }

    /// Drop the credentials, persisted and in-memory, together.
    pub fn evict<S: CredentialStore>(&mut self, store: &S) {
        evict_session(store);
        self.token = None;
        self.user = None;
        self.loading = false;
        self.resolved = true;
        self.error = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Owning driver for the session state machine.
///
/// Holds the store and the auth service alongside the [`Session`] and
/// exposes the login/register/logout/clear-error operations. Calls are not
/// serialized: overlapping attempts resolve last-write-wins, and the UI is
/// expected (but not required) to prevent them by disabling the form while
/// [`Session::is_loading`] is true.
pub struct SessionManager<S: CredentialStore, A: AuthApi> {
    session: Session,
    store: S,
    auth: A,
}

impl<S: CredentialStore, A: AuthApi> SessionManager<S, A> {
    /// Hydrate from the store and take ownership of the collaborators.
    pub fn restore(store: S, auth: A) -> Self {
        let session = Session::restore(&store);
        Self {
            session,
            store,
            auth,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Exchange credentials for a session.
    ///
    /// On success the credential triple is persisted before the state flips
    /// to authenticated. On failure the session keeps whatever identity it
    /// had, a user-facing message lands in [`Session::error`], and the
    /// typed failure propagates so the calling form can stay on the page.
    pub async fn login(&mut self, credentials: LoginRequest) -> Result<(), ApiError> {
        self.session.begin_attempt();
        match self.auth.login(&credentials).await {
            Ok(response) => {
                self.session.complete_login(&self.store, response);
                Ok(())
            }
            Err(error) => {
                self.session.fail_attempt(&error);
                Err(error)
            }
        }
    }

    /// Create an account. Does not log in: success is reported to the
    /// caller, which routes the user to the login form.
    pub async fn register(&mut self, data: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.session.begin_attempt();
        match self.auth.register(&data).await {
            Ok(response) => {
                self.session.complete_register();
                Ok(response)
            }
            Err(error) => {
                self.session.fail_attempt(&error);
                Err(error)
            }
        }
    }

    /// End the session: clear storage and memory together, then force a
    /// full load of the application root.
    pub fn logout(&mut self) {
        self.session.evict(&self.store);
        navigation::hard_redirect(navigation::ROOT);
    }

    pub fn clear_error(&mut self) {
        self.session.clear_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use store::{MemoryStore, TOKEN_EXPIRY_KEY, TOKEN_KEY, USER_KEY};

    #[derive(Clone)]
    struct StubAuth {
        login: Result<AuthResponse, ApiError>,
        register: Result<RegisterResponse, ApiError>,
    }

    impl StubAuth {
        fn logging_in(response: AuthResponse) -> Self {
            Self {
                login: Ok(response),
                register: Err(ApiError::Unknown),
            }
        }

        fn rejecting(error: ApiError) -> Self {
            Self {
                login: Err(error.clone()),
                register: Err(error),
            }
        }

        fn registering(response: RegisterResponse) -> Self {
            Self {
                login: Err(ApiError::Unknown),
                register: Ok(response),
            }
        }
    }

    impl AuthApi for StubAuth {
        async fn login(&self, _credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
            self.login.clone()
        }

        async fn register(&self, _data: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
            self.register.clone()
        }

        async fn check_email(&self, _email: &str) -> bool {
            false
        }
    }

    fn sample_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn sample_user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            city: None,
            state: None,
            photo_path: None,
            created_at: sample_time(),
        }
    }

    fn sample_response(token: &str, user_id: &str) -> AuthResponse {
        AuthResponse {
            token: token.to_string(),
            user: sample_user(user_id, "A"),
            expires_at: Some(sample_time()),
        }
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        }
    }

    fn registration() -> RegisterRequest {
        RegisterRequest {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            phone: None,
            city: None,
            state: None,
        }
    }

    fn assert_identity_paired(session: &Session) {
        assert_eq!(session.token().is_some(), session.user().is_some());
    }

    #[tokio::test]
    async fn test_login_success_persists_then_authenticates() {
        let store = MemoryStore::new();
        let mut manager =
            SessionManager::restore(store.clone(), StubAuth::logging_in(sample_response("tok123", "u1")));
        assert!(!manager.session().is_authenticated());

        manager.login(credentials()).await.unwrap();

        let session = manager.session();
        assert!(session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.token(), Some("tok123"));
        assert_eq!(session.user().unwrap().id, "u1");

        // All three keys are on disk, with the user re-readable.
        assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("tok123"));
        let stored: User = serde_json::from_str(&store.get_item(USER_KEY).unwrap()).unwrap();
        assert_eq!(stored.id, "u1");
        assert!(store.get_item(TOKEN_EXPIRY_KEY).is_some());
    }

    #[tokio::test]
    async fn test_rejected_login_stays_anonymous_with_message() {
        let store = MemoryStore::new();
        let mut manager = SessionManager::restore(
            store.clone(),
            StubAuth::rejecting(ApiError::AuthRejected {
                message: Some("invalid credentials".to_string()),
            }),
        );

        let error = manager.login(credentials()).await.unwrap_err();

        assert!(matches!(error, ApiError::AuthRejected { .. }));
        let session = manager.session();
        assert!(!session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("invalid credentials"));
        assert!(store.read_all().is_none());
    }

    #[tokio::test]
    async fn test_token_and_user_always_move_together() {
        let store = MemoryStore::new();

        let mut manager =
            SessionManager::restore(store.clone(), StubAuth::logging_in(sample_response("tok123", "u1")));
        assert_identity_paired(manager.session());

        manager.login(credentials()).await.unwrap();
        assert_identity_paired(manager.session());

        let mut manager = SessionManager::restore(
            store.clone(),
            StubAuth::rejecting(ApiError::TransportFailure),
        );
        assert_identity_paired(manager.session());

        let _ = manager.login(credentials()).await;
        assert_identity_paired(manager.session());

        manager.logout();
        assert_identity_paired(manager.session());
    }

    #[tokio::test]
    async fn test_hydration_is_idempotent() {
        let store = MemoryStore::new();
        let mut manager =
            SessionManager::restore(store.clone(), StubAuth::logging_in(sample_response("tok123", "u1")));
        manager.login(credentials()).await.unwrap();

        let first = Session::restore(&store);
        let second = Session::restore(&store);

        assert!(first.is_authenticated());
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_stored_user_fails_closed() {
        let store = MemoryStore::new();
        store.set_item(TOKEN_KEY, "tok123");
        store.set_item(USER_KEY, "not json at all");

        let session = Session::restore(&store);

        assert!(!session.is_authenticated());
        assert!(session.is_resolved());
        assert!(session.error().is_none());
        // The corrupt record is discarded, not left to fail again.
        assert!(store.get_item(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_restore_without_expiry_still_authenticates() {
        let store = MemoryStore::new();
        let mut session = Session::anonymous();
        session.complete_login(
            &store,
            AuthResponse {
                expires_at: None,
                ..sample_response("tok123", "u1")
            },
        );

        let restored = Session::restore(&store);
        assert!(restored.is_authenticated());
        assert!(store.get_item(TOKEN_EXPIRY_KEY).is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_memory_storage_and_redirects_home() {
        let store = MemoryStore::new();
        let mut manager =
            SessionManager::restore(store.clone(), StubAuth::logging_in(sample_response("tok123", "u1")));
        manager.login(credentials()).await.unwrap();

        manager.logout();

        let session = manager.session();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(session.error().is_none());
        assert!(store.read_all().is_none());
        assert!(store.get_item(TOKEN_EXPIRY_KEY).is_none());
        assert_eq!(
            navigation::last_redirect().as_deref(),
            Some(navigation::ROOT)
        );

        // A later hydration starts over as anonymous.
        assert!(!Session::restore(&store).is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_relogin_leaves_existing_session_untouched() {
        let store = MemoryStore::new();
        let mut manager =
            SessionManager::restore(store.clone(), StubAuth::logging_in(sample_response("tok123", "u1")));
        manager.login(credentials()).await.unwrap();

        // Same store, fresh manager: a second context re-attempting login.
        let mut retry = SessionManager::restore(
            store.clone(),
            StubAuth::rejecting(ApiError::AuthRejected { message: None }),
        );
        assert!(retry.session().is_authenticated());

        let _ = retry.login(credentials()).await;

        assert!(retry.session().is_authenticated());
        assert_eq!(retry.session().token(), Some("tok123"));
        assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("tok123"));
        assert!(retry.session().error().is_some());
    }

    #[tokio::test]
    async fn test_register_reports_success_without_logging_in() {
        let store = MemoryStore::new();
        let mut manager = SessionManager::restore(
            store.clone(),
            StubAuth::registering(RegisterResponse {
                id: "u9".to_string(),
            }),
        );

        let response = manager.register(registration()).await.unwrap();

        assert_eq!(response.id, "u9");
        assert!(!manager.session().is_authenticated());
        assert!(!manager.session().is_loading());
        assert!(store.read_all().is_none());
    }

    #[tokio::test]
    async fn test_register_failure_is_captured_and_propagated() {
        let store = MemoryStore::new();
        let mut manager = SessionManager::restore(
            store,
            StubAuth::rejecting(ApiError::ValidationFailed {
                message: Some("email already registered".to_string()),
            }),
        );

        let error = manager.register(registration()).await.unwrap_err();

        assert!(matches!(error, ApiError::ValidationFailed { .. }));
        assert_eq!(
            manager.session().error(),
            Some("email already registered")
        );
    }

    #[tokio::test]
    async fn test_later_login_wins() {
        let store = MemoryStore::new();
        let mut manager =
            SessionManager::restore(store.clone(), StubAuth::logging_in(sample_response("tok1", "u1")));
        manager.login(credentials()).await.unwrap();

        let mut manager =
            SessionManager::restore(store.clone(), StubAuth::logging_in(sample_response("tok2", "u2")));
        manager.login(credentials()).await.unwrap();

        assert_eq!(manager.session().token(), Some("tok2"));
        assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("tok2"));
    }

    #[tokio::test]
    async fn test_clear_error_resets_message() {
        let store = MemoryStore::new();
        let mut manager = SessionManager::restore(
            store,
            StubAuth::rejecting(ApiError::AuthRejected { message: None }),
        );
        let _ = manager.login(credentials()).await;
        assert!(manager.session().error().is_some());

        manager.clear_error();
        assert!(manager.session().error().is_none());
    }

    #[test]
    fn test_unresolved_is_the_default() {
        let session = Session::default();
        assert!(session.is_loading());
        assert!(!session.is_resolved());
        assert!(!session.is_authenticated());
    }
}
