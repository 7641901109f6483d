//! Registration form state machine.
//!
//! Client-side validation runs before any request: the first empty field
//! wins, gets flagged, and no network call happens. Only a 201 counts as
//! an account creation; other 2xx statuses are ignored outright, which
//! mirrors the backend's observed behavior.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::error::ApiError;
use crate::net::types::RegisterResponse;
use crate::session::SessionStore;

pub const EMPTY_USERNAME_MESSAGE: &str = "Username cannot be empty";
pub const EMPTY_EMAIL_MESSAGE: &str = "Email cannot be empty";
pub const EMPTY_PASSWORD_MESSAGE: &str = "Password cannot be empty";
pub const ALREADY_REGISTERED_UI_MESSAGE: &str =
    "Registration failed: The email you entered is already registered. Please use a different email.";
pub const INVALID_REQUEST_MESSAGE: &str =
    "Registration failed: Invalid request. Please ensure the data you entered is correct.";
pub const SERVER_ERROR_MESSAGE: &str = "Registration failed: Server error occurred.";
/// Where a successful registration lands, ready to sign in.
pub const REGISTER_REDIRECT_TARGET: &str = "/Login";

/// The one status that counts as an account creation.
pub const CREATED: u16 = 201;

/// Result of the pre-request gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitGate {
    /// All fields present; request may go out.
    Proceed,
    /// An empty field was flagged; no request.
    Invalid,
    /// A previous submission is still in flight; no request.
    Busy,
}

/// What the page should do after a submission resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Account created; schedule the delayed navigation to the login page.
    RedirectLogin,
    /// Stay on the form (failure shown inline, or response ignored).
    Stay,
}

/// All state behind the registration form.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub username_error: bool,
    pub email_error: bool,
    pub password_error: bool,
    pub error: Option<String>,
    pub success: bool,
    pub pending: bool,
}

impl RegisterForm {
    /// Updates the username field. Editing clears that field's error mark.
    pub fn set_username(&mut self, value: String) {
        self.username = value;
        self.username_error = false;
    }

    /// Updates the email field. Editing clears that field's error mark.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.email_error = false;
    }

    /// Updates the password field. Editing clears that field's error mark.
    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.password_error = false;
    }

    /// Gates a submission: refuses while one is in flight, resets stale
    /// error state, then validates field by field. The first empty field
    /// short-circuits with its own message.
    pub fn begin_submit(&mut self) -> SubmitGate {
        if self.pending {
            return SubmitGate::Busy;
        }
        self.error = None;
        self.username_error = false;
        self.email_error = false;
        self.password_error = false;

        if self.username.is_empty() {
            self.username_error = true;
            self.error = Some(EMPTY_USERNAME_MESSAGE.to_owned());
            return SubmitGate::Invalid;
        }
        if self.email.is_empty() {
            self.email_error = true;
            self.error = Some(EMPTY_EMAIL_MESSAGE.to_owned());
            return SubmitGate::Invalid;
        }
        if self.password.is_empty() {
            self.password_error = true;
            self.error = Some(EMPTY_PASSWORD_MESSAGE.to_owned());
            return SubmitGate::Invalid;
        }

        self.pending = true;
        SubmitGate::Proceed
    }

    /// Applies the backend's answer. A 201 with a token persists it and
    /// redirects to the login page; a 201 without one is reported as an
    /// invalid request; any other 2xx changes nothing.
    pub fn apply_result(
        &mut self,
        result: &Result<RegisterResponse, ApiError>,
        session: &SessionStore,
    ) -> RegisterOutcome {
        self.pending = false;
        match result {
            Ok(resp) if resp.status == CREATED => match &resp.token {
                Some(token) => {
                    session.set_token(token);
                    self.success = true;
                    self.error = None;
                    RegisterOutcome::RedirectLogin
                }
                None => {
                    self.fail(INVALID_REQUEST_MESSAGE);
                    RegisterOutcome::Stay
                }
            },
            Ok(_) => RegisterOutcome::Stay,
            Err(err) if err.is_already_registered() => {
                self.fail(ALREADY_REGISTERED_UI_MESSAGE);
                RegisterOutcome::Stay
            }
            Err(ApiError::Network) => {
                self.fail(SERVER_ERROR_MESSAGE);
                RegisterOutcome::Stay
            }
            Err(_) => {
                self.fail(INVALID_REQUEST_MESSAGE);
                RegisterOutcome::Stay
            }
        }
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_owned());
        self.success = false;
    }
}
