//! # API crate: REST client and session machinery for CareerFlow
//!
//! Everything between the UI and the CareerFlow REST service lives here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: [`User`], login/register requests and responses |
//! | [`error`] | Closed [`ApiError`] taxonomy, classified once at the HTTP boundary |
//! | [`client`] | [`ApiClient`]: bearer-token decoration and unauthorized-response eviction |
//! | [`auth`] | [`AuthApi`] trait and the HTTP [`AuthService`] (login, register, check-email) |
//! | [`session`] | [`Session`] state machine and the owning [`SessionManager`] driver |
//! | [`navigation`] | Hard (router-bypassing) browser navigation |
//!
//! The crate is generic over [`store::CredentialStore`], so the whole
//! login/logout/eviction surface runs natively under test with a
//! [`store::MemoryStore`] and in the browser with localStorage.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod navigation;
pub mod session;

pub use auth::{AuthApi, AuthService};
pub use client::ApiClient;
pub use error::ApiError;
pub use models::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, User};
pub use navigation::hard_redirect;
pub use session::{evict_session, Session, SessionManager};
