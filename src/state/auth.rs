#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Shared signed-in account state, provided via context as an `RwSignal`.
///
/// Populated on app start from the persisted token, and again after each
/// successful login or Google exchange. Movie pages render the same
/// whether or not a user is present; only the navbar and the profile
/// page read this.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Marks a profile fetch in flight.
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Stores the fetch outcome. `None` means the token did not resolve
    /// to an account; the stale token itself is left for sign-out to
    /// clean up.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Back to signed-out.
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }

    /// Name to greet the user with, preferring the account name over the
    /// email address.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        user.name.clone().or_else(|| user.email.clone())
    }
}
