//! Authentication state consumed by the navigation bar.
//!
//! The session itself is owned by the login flow; this module only models
//! the signed-in user and exposes it (plus a logout capability) through a
//! Dioxus context.

pub mod context;
pub mod user;

pub use context::{use_auth, use_auth_provider, use_auth_provider_with, AuthContext};
pub use user::{decode_session, encode_session, SessionError, User, SESSION_KEY};
