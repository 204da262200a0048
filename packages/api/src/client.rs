//! HTTP client with bearer-token decoration and unauthorized-response
//! eviction.
//!
//! [`ApiClient`] is the one place requests leave the application. It reads
//! the token straight from the credential store on every call, never from
//! the in-memory session, so this layer carries no UI state. It also
//! owns the single global side effect in the error path: a 401 on a guarded
//! request evicts the stored session and forces the browser to the login
//! route. Auth endpoints opt out of that guard, so a failed login attempt
//! can never log an existing session out.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::CredentialStore;

use crate::error::ApiError;
use crate::navigation;
use crate::session;

/// Development default, matching the service's local profile.
pub const DEFAULT_BASE_URL: &str = "http://localhost:7051/api";

/// Resolve the API base URL at compile time.
///
/// Set `CAREERFLOW_API_URL` in the build environment to point a bundle at
/// another deployment; trailing slashes are tolerated.
pub fn base_url_from_env() -> String {
    option_env!("CAREERFLOW_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Error body shape the service uses across endpoints.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// JSON REST client bound to a credential store.
#[derive(Clone)]
pub struct ApiClient<S: CredentialStore> {
    http: reqwest::Client,
    base_url: String,
    store: S,
}

impl<S: CredentialStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(10));
        Self {
            http: builder.build().expect("failed to construct HTTP client"),
            base_url: base_url.into(),
            store,
        }
    }

    /// Client against the compile-time configured deployment.
    pub fn from_env(store: S) -> Self {
        Self::new(base_url_from_env(), store)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, None, true).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(body), true).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(body), true).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::DELETE, path, None, true).await
    }

    /// GET without the unauthorized-eviction guard, for auth endpoints.
    pub(crate) async fn get_public<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, None, false).await
    }

    /// POST without the unauthorized-eviction guard, for auth endpoints.
    pub(crate) async fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(body), false).await
    }

    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        guarded: bool,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "api request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.store.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), %url, "api response");

        if status.is_success() {
            return response.json::<T>().await.map_err(ApiError::from_transport);
        }

        if guarded && status == StatusCode::UNAUTHORIZED {
            handle_unauthorized(&self.store);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        Err(ApiError::from_status(status.as_u16(), message))
    }
}

/// The 401 side effect: evict the stored session, then force the browser to
/// the login route.
///
/// The eviction completes before the navigation fires so the login page can
/// never re-read stale credentials. The failed request is not retried.
pub(crate) fn handle_unauthorized<S: CredentialStore>(store: &S) {
    tracing::info!("unauthorized response, evicting session");
    session::evict_session(store);
    navigation::hard_redirect(navigation::LOGIN_ROUTE);
}
