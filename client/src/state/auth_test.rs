use super::*;

fn user() -> User {
    User { name: Some("Ada".into()), id: Some("sub-1".into()), ..User::default() }
}

#[test]
fn default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.recorded);
    assert_eq!(state.status(), SessionStatus::Loading);
}

#[test]
fn loading_wins_over_user() {
    let state = AuthState { user: Some(user()), loading: true, ..AuthState::default() };
    assert_eq!(state.status(), SessionStatus::Loading);
}

#[test]
fn resolve_with_user_is_authenticated() {
    let mut state = AuthState::default();
    state.resolve(Some(user()));
    assert_eq!(state.status(), SessionStatus::Authenticated);
}

#[test]
fn resolve_without_user_is_unauthenticated() {
    let mut state = AuthState::default();
    state.resolve(None);
    assert_eq!(state.status(), SessionStatus::Unauthenticated);
}

#[test]
fn begin_logout_only_once() {
    let mut state = AuthState::default();
    state.resolve(Some(user()));
    assert!(state.begin_logout());
    assert!(!state.begin_logout());
    // The user stays until the reload replaces the page.
    assert_eq!(state.status(), SessionStatus::Authenticated);
}
