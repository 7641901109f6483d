//! Error taxonomy for backend calls.
//!
//! Failures are classified once, at the HTTP boundary, so the forms can
//! match on structured kinds instead of string-comparing backend messages
//! at every call site.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Backend message that marks a duplicate registration. This is the only
/// message the UI distinguishes; everything else is generic.
pub const ALREADY_REGISTERED_MESSAGE: &str = "User has already registered";

/// What went wrong with a backend call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response.
    #[error("network request failed")]
    Network,
    /// Backend answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status { status: u16, kind: BackendErrorKind },
    /// A 2xx auth response arrived without the expected token field.
    #[error("response did not include a token")]
    MissingToken,
    /// Body could not be encoded or decoded.
    #[error("malformed request or response body")]
    Decode,
}

/// Backend failure classes the forms care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// The email is already taken (exact backend message match).
    AlreadyRegistered,
    /// Any other backend-reported failure.
    Other,
}

impl BackendErrorKind {
    /// Classifies a backend error message. Matching is exact; the backend
    /// does not send error codes.
    #[must_use]
    pub fn classify(message: Option<&str>) -> Self {
        if message == Some(ALREADY_REGISTERED_MESSAGE) {
            Self::AlreadyRegistered
        } else {
            Self::Other
        }
    }
}

impl ApiError {
    /// True when the backend reported the duplicate-registration case.
    #[must_use]
    pub fn is_already_registered(&self) -> bool {
        matches!(
            self,
            Self::Status { kind: BackendErrorKind::AlreadyRegistered, .. }
        )
    }
}
