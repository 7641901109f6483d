use super::*;

#[test]
fn authorize_url_carries_the_registration_and_nonce() {
    let url = authorize_url("https://iclix.example", "n0nce");
    assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
    assert!(url.contains("client_id=571250239152-m0ndddns03q2rr3gledb99nb90unmgue.apps.googleusercontent.com"));
    assert!(url.contains("redirect_uri=https%3A%2F%2Ficlix.example%2Foauth%2Fcallback"));
    assert!(url.contains("response_type=token"));
    assert!(url.contains("scope=openid%20email%20profile"));
    assert!(url.contains("state=n0nce"));
}

#[test]
fn nonces_are_unique_and_url_safe() {
    let a = new_nonce();
    let b = new_nonce();
    assert_ne!(a, b);
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn parse_fragment_reads_known_keys() {
    let params = parse_fragment("#access_token=ya29.abc&token_type=Bearer&state=n0nce&expires_in=3599");
    assert_eq!(params.access_token.as_deref(), Some("ya29.abc"));
    assert_eq!(params.state.as_deref(), Some("n0nce"));
    assert!(params.error.is_none());
}

#[test]
fn parse_fragment_accepts_a_missing_hash_prefix() {
    let params = parse_fragment("access_token=t&state=s");
    assert_eq!(params.access_token.as_deref(), Some("t"));
    assert_eq!(params.state.as_deref(), Some("s"));
}

#[test]
fn parse_fragment_decodes_percent_escapes() {
    let params = parse_fragment("#error=access_denied&state=a%2Fb%20c");
    assert_eq!(params.error.as_deref(), Some("access_denied"));
    assert_eq!(params.state.as_deref(), Some("a/b c"));
}

#[test]
fn parse_fragment_skips_malformed_pairs() {
    let params = parse_fragment("#justakey&access_token=t");
    assert_eq!(params.access_token.as_deref(), Some("t"));
    assert!(params.state.is_none());
}

#[test]
fn parse_fragment_of_empty_input_is_empty() {
    assert_eq!(parse_fragment(""), CallbackParams::default());
    assert_eq!(parse_fragment("#"), CallbackParams::default());
}

#[test]
fn validate_accepts_a_matching_state() {
    let params = parse_fragment("#access_token=ya29.abc&state=n0nce");
    let token = validate_callback(&params, Some("n0nce")).unwrap();
    assert_eq!(token, "ya29.abc");
}

#[test]
fn validate_surfaces_provider_errors_first() {
    let params = parse_fragment("#error=access_denied&access_token=t&state=s");
    assert_eq!(
        validate_callback(&params, Some("s")),
        Err(CallbackError::Provider("access_denied".to_owned()))
    );
}

#[test]
fn validate_rejects_a_missing_token() {
    let params = parse_fragment("#state=n0nce");
    assert_eq!(validate_callback(&params, Some("n0nce")), Err(CallbackError::MissingToken));
}

#[test]
fn validate_rejects_a_state_mismatch() {
    let params = parse_fragment("#access_token=t&state=other");
    assert_eq!(validate_callback(&params, Some("n0nce")), Err(CallbackError::StateMismatch));
}

#[test]
fn validate_rejects_when_nothing_was_stashed() {
    let params = parse_fragment("#access_token=t&state=n0nce");
    assert_eq!(validate_callback(&params, None), Err(CallbackError::StateMismatch));
}

#[test]
fn validate_rejects_a_callback_without_state() {
    let params = parse_fragment("#access_token=t");
    assert_eq!(validate_callback(&params, Some("n0nce")), Err(CallbackError::StateMismatch));
}

#[test]
fn callback_error_messages_are_user_facing() {
    assert_eq!(
        CallbackError::Provider("access_denied".to_owned()).to_string(),
        "Google sign-in failed: access_denied"
    );
    assert_eq!(
        CallbackError::MissingToken.to_string(),
        "Google sign-in returned no access token"
    );
}
