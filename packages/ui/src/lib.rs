//! This crate contains all shared UI for the workspace.

pub mod components;

mod auth;
pub use auth::{use_session, SessionHandle, SessionProvider};

mod navbar;
pub use navbar::Navbar;

pub mod format;
