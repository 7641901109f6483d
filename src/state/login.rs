//! Login form state machine.
//!
//! Pure state transitions, so every branch of the submit flow is
//! testable without a browser. The page component owns an
//! `RwSignal<LoginForm>` and drives it from DOM events.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::error::ApiError;
use crate::net::types::AuthSuccess;
use crate::session::SessionStore;

/// Shown when a 2xx login response carried no token. Historical wording,
/// kept verbatim.
pub const TOKEN_EXPIRED_MESSAGE: &str = "Token Expired Broo";
/// Shown for every other login failure.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";
/// Where a successful login lands.
pub const LOGIN_REDIRECT_TARGET: &str = "/";

/// What the page should do after a submission resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token persisted; schedule the delayed navigation home.
    RedirectHome,
    /// Failure shown inline; stay on the form.
    Stay,
}

/// All state behind the login form.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub email_error: bool,
    pub password_error: bool,
    pub error: Option<String>,
    pub welcome: Option<String>,
    pub show_password: bool,
    pub pending: bool,
}

impl LoginForm {
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

    /// Flips the password field between masked and plain text.
    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Gates a submission. Returns `false` while a previous submission is
    /// still in flight, so a double click cannot fire two requests.
    pub fn begin_submit(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Applies the backend's answer. On success the token is persisted
    /// and the caller schedules the redirect; every failure is terminal
    /// for this attempt and marks both fields.
    pub fn apply_result(
        &mut self,
        result: &Result<AuthSuccess, ApiError>,
        session: &SessionStore,
    ) -> LoginOutcome {
        self.pending = false;
        match result {
            Ok(success) => {
                session.set_token(&success.token);
                self.error = None;
                self.email_error = false;
                self.password_error = false;
                self.welcome = Some(welcome_message(success.user.name.as_deref()));
                LoginOutcome::RedirectHome
            }
            Err(ApiError::MissingToken) => {
                self.fail(TOKEN_EXPIRED_MESSAGE);
                LoginOutcome::Stay
            }
            Err(_) => {
                self.fail(INVALID_CREDENTIALS_MESSAGE);
                LoginOutcome::Stay
            }
        }
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_owned());
        self.email_error = true;
        self.password_error = true;
        self.welcome = None;
    }
}

fn welcome_message(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Login successful, welcome {name}!"),
        None => "Login successful!".to_owned(),
    }
}
