use super::*;
use crate::net::error::BackendErrorKind;
use crate::net::types::User;

fn success_with_name(name: &str) -> Result<AuthSuccess, ApiError> {
    Ok(AuthSuccess {
        token: "t0k3n".to_owned(),
        user: User { name: Some(name.to_owned()), ..User::default() },
    })
}

#[test]
fn editing_a_field_clears_its_error_mark() {
    let mut form = LoginForm::default();
    form.email_error = true;
    form.password_error = true;

    form.set_email("a@b.c".to_owned());
    assert!(!form.email_error);
    assert!(form.password_error);

    form.set_password("hunter2".to_owned());
    assert!(!form.password_error);
}

#[test]
fn begin_submit_blocks_while_pending() {
    let mut form = LoginForm::default();
    assert!(form.begin_submit());
    assert!(form.pending);
    assert!(!form.begin_submit());
}

#[test]
fn success_persists_the_token_and_redirects_home() {
    let session = SessionStore::memory();
    let mut form = LoginForm::default();
    assert!(form.begin_submit());

    let outcome = form.apply_result(&success_with_name("alice"), &session);
    assert_eq!(outcome, LoginOutcome::RedirectHome);
    assert_eq!(LOGIN_REDIRECT_TARGET, "/");
    assert_eq!(session.token().as_deref(), Some("t0k3n"));
    assert_eq!(form.welcome.as_deref(), Some("Login successful, welcome alice!"));
    assert!(form.error.is_none());
    assert!(!form.email_error);
    assert!(!form.password_error);
    assert!(!form.pending);
}

#[test]
fn success_without_a_name_uses_the_plain_welcome() {
    let session = SessionStore::memory();
    let mut form = LoginForm::default();
    let result = Ok(AuthSuccess { token: "t".to_owned(), user: User::default() });
    form.apply_result(&result, &session);
    assert_eq!(form.welcome.as_deref(), Some("Login successful!"));
}

#[test]
fn missing_token_shows_the_token_expired_message() {
    let session = SessionStore::memory();
    let mut form = LoginForm::default();
    assert!(form.begin_submit());

    let outcome = form.apply_result(&Err(ApiError::MissingToken), &session);
    assert_eq!(outcome, LoginOutcome::Stay);
    assert_eq!(form.error.as_deref(), Some("Token Expired Broo"));
    assert!(form.email_error);
    assert!(form.password_error);
    assert!(session.token().is_none());
    assert!(!form.pending);
}

#[test]
fn request_failures_show_the_generic_message() {
    let session = SessionStore::memory();
    for err in [
        ApiError::Network,
        ApiError::Decode,
        ApiError::Status { status: 401, kind: BackendErrorKind::Other },
    ] {
        let mut form = LoginForm::default();
        let outcome = form.apply_result(&Err(err), &session);
        assert_eq!(outcome, LoginOutcome::Stay);
        assert_eq!(form.error.as_deref(), Some(INVALID_CREDENTIALS_MESSAGE));
        assert!(form.email_error);
        assert!(form.password_error);
    }
    assert!(session.token().is_none());
}

#[test]
fn failure_replaces_an_earlier_welcome() {
    let session = SessionStore::memory();
    let mut form = LoginForm::default();
    form.apply_result(&success_with_name("alice"), &session);
    assert!(form.welcome.is_some());

    form.apply_result(&Err(ApiError::MissingToken), &session);
    assert!(form.welcome.is_none());
    assert!(form.error.is_some());
}

#[test]
fn resubmit_is_possible_after_a_failure() {
    let session = SessionStore::memory();
    let mut form = LoginForm::default();
    assert!(form.begin_submit());
    form.apply_result(&Err(ApiError::Network), &session);
    assert!(form.begin_submit());
}

#[test]
fn a_resubmit_drops_the_redirect_scheduled_by_an_earlier_success() {
    use crate::util::redirect::{REDIRECT_DELAY_MS, ScheduledRedirect};

    let session = SessionStore::memory();
    let mut form = LoginForm::default();
    assert!(form.begin_submit());
    let outcome = form.apply_result(&success_with_name("alice"), &session);
    assert_eq!(outcome, LoginOutcome::RedirectHome);
    let mut redirect = Some(ScheduledRedirect::after(REDIRECT_DELAY_MS, || {}));
    assert!(redirect.is_some());

    // Submitting again disarms the pending navigation before the request
    // goes out, so a failed second attempt cannot be yanked home by the
    // first success's timer.
    assert!(form.begin_submit());
    redirect = None;
    let outcome = form.apply_result(&Err(ApiError::Network), &session);
    assert_eq!(outcome, LoginOutcome::Stay);
    assert!(redirect.is_none());
    assert_eq!(form.error.as_deref(), Some(INVALID_CREDENTIALS_MESSAGE));
    assert!(form.welcome.is_none());
}

#[test]
fn toggle_show_password_flips() {
    let mut form = LoginForm::default();
    assert!(!form.show_password);
    form.toggle_show_password();
    assert!(form.show_password);
    form.toggle_show_password();
    assert!(!form.show_password);
}
