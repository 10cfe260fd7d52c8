use super::*;

#[test]
fn should_redirect_unauth_when_resolved_without_user() {
    assert_eq!(redirect_target(&AuthState::Unauthenticated), Some("/login"));
    assert!(!may_render(&AuthState::Unauthenticated));
}

#[test]
fn should_not_redirect_while_loading() {
    assert_eq!(redirect_target(&AuthState::Loading), None);
    assert!(!may_render(&AuthState::Loading));
}

#[test]
fn should_render_when_user_exists() {
    let state = AuthState::authenticated("tok", "a@x.com").unwrap();
    assert_eq!(redirect_target(&state), None);
    assert!(may_render(&state));
}
