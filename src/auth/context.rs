//! Auth context shared between the login flow and the navigation bar.
//!
//! Holds the signed-in user as a signal. On the client the user is restored
//! from and persisted to localStorage under [`SESSION_KEY`](super::user::SESSION_KEY).

use dioxus::prelude::*;

use super::user::User;
#[cfg(target_arch = "wasm32")]
use super::user::{decode_session, encode_session, SessionError, SESSION_KEY};
use crate::nav::Logout;

/// Global auth state shared via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    user: Signal<Option<User>>,
}

impl AuthContext {
    /// Current user snapshot (None when signed out)
    pub fn user(&self) -> Option<User> {
        (self.user)()
    }

    /// Record a freshly signed-in user
    pub fn sign_in(&self, user: User) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(e) = save_session(&user) {
                tracing::warn!("Failed to persist session: {}", e);
            }
        }

        tracing::info!("Signed in as {:?} (role {:?})", user.username, user.role);
        let mut current = self.user;
        current.set(Some(user));
    }

    /// Drop the current session
    pub fn sign_out(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            clear_session();
        }

        let mut current = self.user;
        current.set(None);
        tracing::info!("Signed out");
    }
}

impl Logout for AuthContext {
    fn logout(&mut self) {
        self.sign_out();
    }
}

/// Initialize auth context provider - call once at app root
pub fn use_auth_provider() -> AuthContext {
    use_auth_provider_with(None)
}

/// Initialize auth context provider with a known user (server render, tests)
pub fn use_auth_provider_with(initial: Option<User>) -> AuthContext {
    let user = use_signal(move || initial);

    let ctx = AuthContext { user };
    use_context_provider(|| ctx);

    // Client-side only: restore the session saved by the login flow
    #[cfg(target_arch = "wasm32")]
    {
        let mut user = user;
        use_effect(move || match load_session() {
            Ok(saved) => user.set(saved),
            Err(e) => {
                tracing::warn!("Discarding stored session: {}", e);
                clear_session();
            }
        });
    }

    ctx
}

/// Get auth context - use in any component
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
fn storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(SessionError::StorageUnavailable)
}

#[cfg(target_arch = "wasm32")]
fn load_session() -> Result<Option<User>, SessionError> {
    match storage()?.get_item(SESSION_KEY) {
        Ok(Some(raw)) => decode_session(&raw).map(Some),
        Ok(None) => Ok(None),
        Err(_) => Err(SessionError::StorageUnavailable),
    }
}

#[cfg(target_arch = "wasm32")]
fn save_session(user: &User) -> Result<(), SessionError> {
    let raw = encode_session(user)?;
    storage()?
        .set_item(SESSION_KEY, &raw)
        .map_err(|_| SessionError::StorageUnavailable)
}

#[cfg(target_arch = "wasm32")]
fn clear_session() {
    match storage() {
        Ok(storage) => {
            let _ = storage.remove_item(SESSION_KEY);
        }
        Err(e) => tracing::warn!("Failed to clear session: {}", e),
    }
}
