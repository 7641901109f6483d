//! Google sign-in via the implicit OAuth redirect flow.
//!
//! The button stashes a state nonce, then sends the whole page to
//! Google's consent screen. Google redirects back to `/oauth/callback`
//! with the access token in the URL fragment; the callback page parses
//! and validates it here, then exchanges it with the backend.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use thiserror::Error;

use crate::session::SessionStore;

/// OAuth client this app is registered as with Google.
pub const GOOGLE_CLIENT_ID: &str =
    "571250239152-m0ndddns03q2rr3gledb99nb90unmgue.apps.googleusercontent.com";
/// App route Google redirects back to.
pub const CALLBACK_PATH: &str = "/oauth/callback";

const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const SCOPES: &str = "openid email profile";

/// A fresh state nonce for one authorization round trip.
#[must_use]
pub fn new_nonce() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Builds the consent-screen URL for the implicit flow. `origin` is the
/// scheme-and-host this app is served from; the redirect URI must match
/// the client registration exactly.
#[must_use]
pub fn authorize_url(origin: &str, nonce: &str) -> String {
    let redirect_uri = format!("{origin}{CALLBACK_PATH}");
    let params = [
        ("client_id", GOOGLE_CLIENT_ID),
        ("redirect_uri", redirect_uri.as_str()),
        ("response_type", "token"),
        ("scope", SCOPES),
        ("state", nonce),
    ];
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{AUTHORIZE_ENDPOINT}?{query}")
}

/// Fields of interest in the fragment Google appends to the callback URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub access_token: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Parses a callback fragment (with or without the leading `#`). Unknown
/// keys and undecodable values are skipped.
#[must_use]
pub fn parse_fragment(fragment: &str) -> CallbackParams {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut params = CallbackParams::default();
    for pair in raw.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let Ok(value) = urlencoding::decode(value) else {
            continue;
        };
        let value = value.into_owned();
        match key {
            "access_token" => params.access_token = Some(value),
            "state" => params.state = Some(value),
            "error" => params.error = Some(value),
            _ => {}
        }
    }
    params
}

/// Why a callback could not produce a usable access token.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CallbackError {
    /// Google reported an error instead of granting access.
    #[error("Google sign-in failed: {0}")]
    Provider(String),
    /// The fragment carried no access token.
    #[error("Google sign-in returned no access token")]
    MissingToken,
    /// The state nonce did not match the one this browser stashed.
    #[error("Google sign-in state did not match this session")]
    StateMismatch,
}

/// Checks a parsed callback against the stashed nonce and extracts the
/// access token. A provider-reported error wins over everything else; a
/// missing or mismatched state is rejected even when a token is present.
///
/// # Errors
///
/// See [`CallbackError`].
pub fn validate_callback(
    params: &CallbackParams,
    expected_nonce: Option<&str>,
) -> Result<String, CallbackError> {
    if let Some(error) = &params.error {
        return Err(CallbackError::Provider(error.clone()));
    }
    let Some(token) = &params.access_token else {
        return Err(CallbackError::MissingToken);
    };
    match (params.state.as_deref(), expected_nonce) {
        (Some(got), Some(want)) if got == want => Ok(token.clone()),
        _ => Err(CallbackError::StateMismatch),
    }
}

// ===== Browser glue =====

/// Stashes a nonce and sends the page to Google's consent screen.
/// No-op outside the browser.
pub fn start_google_login(session: &SessionStore) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let Ok(origin) = location.origin() else {
            return;
        };
        let nonce = new_nonce();
        session.stash_oauth_nonce(&nonce);
        if location.assign(&authorize_url(&origin, &nonce)).is_err() {
            leptos::logging::warn!("oauth: failed to open the Google consent screen");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Parses the current page's URL fragment. Empty outside the browser.
#[must_use]
pub fn current_callback_params() -> CallbackParams {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return CallbackParams::default();
        };
        match window.location().hash() {
            Ok(hash) => parse_fragment(&hash),
            Err(_) => CallbackParams::default(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        CallbackParams::default()
    }
}
