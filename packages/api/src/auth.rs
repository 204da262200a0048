//! Auth Service wrapper: the three authentication endpoints.

use store::CredentialStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse};

pub const LOGIN_ENDPOINT: &str = "/Auth/login";
pub const REGISTER_ENDPOINT: &str = "/Auth/register";
pub const CHECK_EMAIL_ENDPOINT: &str = "/Auth/check-email";

/// The authentication operations the session manager depends on.
///
/// Abstracted as a trait so the session state machine can be driven by a
/// stub under test; the one production implementation is [`AuthService`].
pub trait AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError>;

    async fn register(&self, data: &RegisterRequest) -> Result<RegisterResponse, ApiError>;

    /// Whether an account with this email already exists. Best-effort: any
    /// failure reads as "unknown", reported as `false`.
    async fn check_email(&self, email: &str) -> bool;
}

/// HTTP implementation of [`AuthApi`] against the CareerFlow service.
///
/// Auth endpoints go through the client's unguarded path: a 401 here means
/// "bad credentials", not "session expired", and must not evict whatever
/// session is already stored.
#[derive(Clone)]
pub struct AuthService<S: CredentialStore> {
    client: ApiClient<S>,
}

impl<S: CredentialStore> AuthService<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    /// Service against the compile-time configured deployment.
    pub fn from_env(store: S) -> Self {
        Self::new(ApiClient::from_env(store))
    }
}

impl<S: CredentialStore> AuthApi for AuthService<S> {
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client.post_public(LOGIN_ENDPOINT, credentials).await
    }

    async fn register(&self, data: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.client.post_public(REGISTER_ENDPOINT, data).await
    }

    async fn check_email(&self, email: &str) -> bool {
        let path = format!("{CHECK_EMAIL_ENDPOINT}?email={}", urlencoding::encode(email));
        match self.client.get_public::<bool>(&path).await {
            Ok(exists) => exists,
            Err(error) => {
                tracing::debug!(%error, "email availability check failed");
                false
            }
        }
    }
}
