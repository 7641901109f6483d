use super::*;

#[test]
fn auth_state_defaults_signed_out() {
    let s = AuthState::default();
    assert!(s.user.is_none());
    assert!(!s.loading);
    assert!(s.display_name().is_none());
}

#[test]
fn resolve_stores_the_user_and_stops_loading() {
    let mut s = AuthState::default();
    s.begin_loading();
    assert!(s.loading);

    let user = User { name: Some("alice".to_owned()), ..User::default() };
    s.resolve(Some(user));
    assert!(!s.loading);
    assert_eq!(s.display_name().as_deref(), Some("alice"));
}

#[test]
fn resolve_none_ends_loading_without_a_user() {
    let mut s = AuthState::default();
    s.begin_loading();
    s.resolve(None);
    assert!(!s.loading);
    assert!(s.user.is_none());
}

#[test]
fn display_name_falls_back_to_email() {
    let mut s = AuthState::default();
    s.resolve(Some(User { email: Some("a@b.c".to_owned()), ..User::default() }));
    assert_eq!(s.display_name().as_deref(), Some("a@b.c"));
}

#[test]
fn clear_signs_out() {
    let mut s = AuthState::default();
    s.resolve(Some(User::default()));
    assert!(s.user.is_some());
    s.clear();
    assert!(s.user.is_none());
    assert!(!s.loading);
}
