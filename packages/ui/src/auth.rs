//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the one [`Session`] signal for the running
//! client and [`use_session`] hands components a [`SessionHandle`] over it.
//! The handle drives the same transition methods as the headless
//! [`api::SessionManager`]; the only thing this layer adds is the signal
//! plumbing, so a second submit racing an in-flight one still resolves
//! last-write-wins.

use api::{AuthApi, AuthService, ApiError, LoginRequest, RegisterRequest, RegisterResponse, Session};
use dioxus::prelude::*;
use store::platform_store;

/// Get a handle on the current session.
pub fn use_session() -> SessionHandle {
    SessionHandle {
        session: use_context::<Signal<Session>>(),
    }
}

/// Provider component that owns the session state.
/// Wrap the router with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    // Hydration is a synchronous localStorage read, so the session is
    // resolved before the first child ever renders; no spinner flash.
    let session = use_signal(|| Session::restore(&platform_store()));
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Copyable handle over the session signal.
///
/// The async operations mirror [`api::SessionManager`]: failures land a
/// user-facing message in the session and still propagate, so a form can
/// stay put instead of navigating.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: Signal<Session>,
}

impl SessionHandle {
    /// Snapshot of the current session state.
    pub fn current(&self) -> Session {
        self.session.read().clone()
    }

    pub async fn login(mut self, credentials: LoginRequest) -> Result<(), ApiError> {
        let store = platform_store();
        let auth = AuthService::from_env(store.clone());

        self.session.with_mut(Session::begin_attempt);
        match auth.login(&credentials).await {
            Ok(response) => {
                self.session
                    .with_mut(|session| session.complete_login(&store, response));
                Ok(())
            }
            Err(error) => {
                tracing::debug!(%error, "login failed");
                self.session
                    .with_mut(|session| session.fail_attempt(&error));
                Err(error)
            }
        }
    }

    pub async fn register(mut self, data: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let auth = AuthService::from_env(platform_store());

        self.session.with_mut(Session::begin_attempt);
        match auth.register(&data).await {
            Ok(response) => {
                self.session.with_mut(Session::complete_register);
                Ok(response)
            }
            Err(error) => {
                tracing::debug!(%error, "registration failed");
                self.session
                    .with_mut(|session| session.fail_attempt(&error));
                Err(error)
            }
        }
    }

    /// Best-effort "is this email taken" probe for the register form.
    pub async fn check_email(&self, email: &str) -> bool {
        AuthService::from_env(platform_store())
            .check_email(email)
            .await
    }

    /// Hard reset: evict the session and load the application root fresh.
    pub fn logout(mut self) {
        let store = platform_store();
        self.session.with_mut(|session| session.evict(&store));
        api::hard_redirect(api::navigation::ROOT);
    }

    pub fn clear_error(mut self) {
        self.session.with_mut(Session::clear_error);
    }
}
