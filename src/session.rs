//! Session persistence behind an injectable store.
//!
//! Auth flows receive a [`SessionStore`] from context instead of reaching
//! for `localStorage` directly, so the token-persistence rules are
//! testable natively with the in-memory backend. The browser backend is
//! the one the running app provides.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "iclix_token";
/// Storage key recording which method produced the current session.
pub const LOGIN_METHOD_KEY: &str = "iclix_login_method";
/// Storage key holding the OAuth state nonce between redirect and callback.
pub const OAUTH_NONCE_KEY: &str = "iclix_oauth_nonce";
/// Marker value written when the session came from the Google flow.
pub const LOGIN_METHOD_GOOGLE: &str = "google";

/// Key-value slot that outlives a page load.
///
/// `Browser` is backed by `localStorage` and degrades to a no-op outside
/// the browser (SSR renders, storage disabled). `Memory` backs tests.
#[derive(Clone)]
pub enum SessionStore {
    Browser,
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

impl SessionStore {
    /// The store the running app uses.
    #[must_use]
    pub fn browser() -> Self {
        Self::Browser
    }

    /// An isolated in-memory store.
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(Arc::default())
    }

    /// Reads a value, `None` when absent or storage is unavailable.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Browser => browser_get(key),
            Self::Memory(map) => map.lock().ok().and_then(|m| m.get(key).cloned()),
        }
    }

    /// Writes a value, overwriting any previous one.
    pub fn set(&self, key: &str, value: &str) {
        match self {
            Self::Browser => browser_set(key, value),
            Self::Memory(map) => {
                if let Ok(mut m) = map.lock() {
                    m.insert(key.to_owned(), value.to_owned());
                }
            }
        }
    }

    /// Deletes a value if present.
    pub fn remove(&self, key: &str) {
        match self {
            Self::Browser => browser_remove(key),
            Self::Memory(map) => {
                if let Ok(mut m) = map.lock() {
                    m.remove(key);
                }
            }
        }
    }

    // ===== Typed helpers =====

    /// The persisted bearer token, when one exists.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    /// Persists the bearer token. Overwritten on every successful auth.
    pub fn set_token(&self, token: &str) {
        self.set(TOKEN_KEY, token);
    }

    /// Records that the current session came from the Google flow.
    pub fn mark_google_login(&self) {
        self.set(LOGIN_METHOD_KEY, LOGIN_METHOD_GOOGLE);
    }

    /// The recorded login method, when one was written.
    #[must_use]
    pub fn login_method(&self) -> Option<String> {
        self.get(LOGIN_METHOD_KEY)
    }

    /// Drops the token and the login-method marker. Sign-out.
    pub fn clear_session(&self) {
        self.remove(TOKEN_KEY);
        self.remove(LOGIN_METHOD_KEY);
    }

    /// Stashes the OAuth state nonce before redirecting to the provider.
    pub fn stash_oauth_nonce(&self, nonce: &str) {
        self.set(OAUTH_NONCE_KEY, nonce);
    }

    /// Removes and returns the stashed nonce. Single use: a replayed
    /// callback finds nothing to match against.
    #[must_use]
    pub fn take_oauth_nonce(&self) -> Option<String> {
        let nonce = self.get(OAUTH_NONCE_KEY);
        if nonce.is_some() {
            self.remove(OAUTH_NONCE_KEY);
        }
        nonce
    }
}

// ===== localStorage plumbing =====

fn browser_get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(value) = storage.get_item(key) {
                return value;
            }
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn browser_set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn browser_remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
