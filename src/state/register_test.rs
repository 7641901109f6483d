use super::*;
use crate::net::error::BackendErrorKind;

fn filled_form() -> RegisterForm {
    let mut form = RegisterForm::default();
    form.set_username("alice".to_owned());
    form.set_email("a@b.c".to_owned());
    form.set_password("hunter2".to_owned());
    form
}

fn created_with(token: Option<&str>) -> Result<RegisterResponse, ApiError> {
    Ok(RegisterResponse { status: 201, token: token.map(str::to_owned) })
}

#[test]
fn empty_username_blocks_first() {
    let mut form = RegisterForm::default();
    form.set_email("a@b.c".to_owned());
    form.set_password("hunter2".to_owned());

    assert_eq!(form.begin_submit(), SubmitGate::Invalid);
    assert_eq!(form.error.as_deref(), Some(EMPTY_USERNAME_MESSAGE));
    assert!(form.username_error);
    assert!(!form.email_error);
    assert!(!form.password_error);
    assert!(!form.pending);
}

#[test]
fn empty_email_blocks_second() {
    let mut form = RegisterForm::default();
    form.set_username("alice".to_owned());
    form.set_password("hunter2".to_owned());

    assert_eq!(form.begin_submit(), SubmitGate::Invalid);
    assert_eq!(form.error.as_deref(), Some(EMPTY_EMAIL_MESSAGE));
    assert!(form.email_error);
    assert!(!form.username_error);
}

#[test]
fn empty_password_blocks_third() {
    let mut form = RegisterForm::default();
    form.set_username("alice".to_owned());
    form.set_email("a@b.c".to_owned());

    assert_eq!(form.begin_submit(), SubmitGate::Invalid);
    assert_eq!(form.error.as_deref(), Some(EMPTY_PASSWORD_MESSAGE));
    assert!(form.password_error);
}

#[test]
fn filled_form_proceeds_and_blocks_while_pending() {
    let mut form = filled_form();
    assert_eq!(form.begin_submit(), SubmitGate::Proceed);
    assert!(form.pending);
    assert_eq!(form.begin_submit(), SubmitGate::Busy);
}

#[test]
fn begin_submit_clears_stale_errors_before_validating() {
    let mut form = filled_form();
    form.error = Some("old".to_owned());
    form.username_error = true;
    form.email_error = true;
    form.password_error = true;

    assert_eq!(form.begin_submit(), SubmitGate::Proceed);
    assert!(form.error.is_none());
    assert!(!form.username_error);
    assert!(!form.email_error);
    assert!(!form.password_error);
}

#[test]
fn created_with_token_persists_and_redirects_to_login() {
    let session = SessionStore::memory();
    let mut form = filled_form();
    assert_eq!(form.begin_submit(), SubmitGate::Proceed);

    let outcome = form.apply_result(&created_with(Some("t0k3n")), &session);
    assert_eq!(outcome, RegisterOutcome::RedirectLogin);
    assert!(form.success);
    assert!(form.error.is_none());
    assert!(!form.pending);
    assert_eq!(session.token().as_deref(), Some("t0k3n"));
}

#[test]
fn created_without_token_reports_invalid_request() {
    let session = SessionStore::memory();
    let mut form = filled_form();
    let outcome = form.apply_result(&created_with(None), &session);
    assert_eq!(outcome, RegisterOutcome::Stay);
    assert!(!form.success);
    assert_eq!(form.error.as_deref(), Some(INVALID_REQUEST_MESSAGE));
    assert!(session.token().is_none());
}

#[test]
fn non_created_success_status_is_ignored() {
    let session = SessionStore::memory();
    let mut form = filled_form();
    assert_eq!(form.begin_submit(), SubmitGate::Proceed);

    let ok_but_not_created = Ok(RegisterResponse { status: 200, token: Some("t".to_owned()) });
    let outcome = form.apply_result(&ok_but_not_created, &session);
    assert_eq!(outcome, RegisterOutcome::Stay);
    assert!(!form.success);
    assert!(form.error.is_none());
    assert!(!form.pending);
    assert!(session.token().is_none());
}

#[test]
fn already_registered_gets_the_duplicate_email_message() {
    let session = SessionStore::memory();
    let mut form = filled_form();
    let err = Err(ApiError::Status { status: 400, kind: BackendErrorKind::AlreadyRegistered });
    form.apply_result(&err, &session);
    assert_eq!(form.error.as_deref(), Some(ALREADY_REGISTERED_UI_MESSAGE));
}

#[test]
fn other_backend_failures_get_the_invalid_request_message() {
    let session = SessionStore::memory();
    let mut form = filled_form();
    let err = Err(ApiError::Status { status: 422, kind: BackendErrorKind::Other });
    form.apply_result(&err, &session);
    assert_eq!(form.error.as_deref(), Some(INVALID_REQUEST_MESSAGE));

    form.apply_result(&Err(ApiError::Decode), &session);
    assert_eq!(form.error.as_deref(), Some(INVALID_REQUEST_MESSAGE));
}

#[test]
fn network_failure_gets_the_server_error_message() {
    let session = SessionStore::memory();
    let mut form = filled_form();
    form.apply_result(&Err(ApiError::Network), &session);
    assert_eq!(form.error.as_deref(), Some(SERVER_ERROR_MESSAGE));
}

#[test]
fn full_registration_scenario() {
    use crate::net::types::RegisterRequest;
    use crate::util::redirect::REDIRECT_DELAY_MS;

    let session = SessionStore::memory();
    let mut form = RegisterForm::default();
    form.set_username("alice".to_owned());
    form.set_email("a@b.com".to_owned());
    form.set_password("secret".to_owned());
    assert_eq!(form.begin_submit(), SubmitGate::Proceed);

    // The page maps the username field onto the backend's `name` key.
    let request = RegisterRequest {
        email: form.email.clone(),
        name: form.username.clone(),
        password: form.password.clone(),
    };
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"email": "a@b.com", "name": "alice", "password": "secret"})
    );

    let created = Ok(RegisterResponse { status: 201, token: Some("tok123".to_owned()) });
    assert_eq!(form.apply_result(&created, &session), RegisterOutcome::RedirectLogin);
    assert_eq!(session.token().as_deref(), Some("tok123"));
    assert_eq!(REGISTER_REDIRECT_TARGET, "/Login");
    assert_eq!(REDIRECT_DELAY_MS, 2_000);
}

#[test]
fn editing_a_field_clears_its_error_mark() {
    let mut form = RegisterForm::default();
    assert_eq!(form.begin_submit(), SubmitGate::Invalid);
    assert!(form.username_error);

    form.set_username("alice".to_owned());
    assert!(!form.username_error);
}

#[test]
fn a_failed_resubmit_drops_the_redirect_and_the_success_banner() {
    use crate::util::redirect::{REDIRECT_DELAY_MS, ScheduledRedirect};

    let session = SessionStore::memory();
    let mut form = filled_form();
    assert_eq!(form.begin_submit(), SubmitGate::Proceed);
    let outcome = form.apply_result(&created_with(Some("t0k3n")), &session);
    assert_eq!(outcome, RegisterOutcome::RedirectLogin);
    assert!(form.success);
    let mut redirect = Some(ScheduledRedirect::after(REDIRECT_DELAY_MS, || {}));
    assert!(redirect.is_some());

    // Submitting again disarms the pending navigation; the failure that
    // follows replaces the success banner and leaves it disarmed.
    assert_eq!(form.begin_submit(), SubmitGate::Proceed);
    redirect = None;
    let outcome = form.apply_result(&Err(ApiError::Network), &session);
    assert_eq!(outcome, RegisterOutcome::Stay);
    assert!(redirect.is_none());
    assert!(!form.success);
    assert_eq!(form.error.as_deref(), Some(SERVER_ERROR_MESSAGE));
}
