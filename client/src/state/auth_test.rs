use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_token() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.token.is_none());
}

#[test]
fn auth_state_from_token_is_loaded() {
    let state = AuthState::from_token(Some("abc".to_owned()));
    assert!(!state.loading);
    assert!(state.is_authenticated());

    let state = AuthState::from_token(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}
