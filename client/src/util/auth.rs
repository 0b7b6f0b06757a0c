//! Shared auth gate for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard and setup pages install the same gate: nothing happens while the
//! session is loading, a signed-out visitor is sent to the landing page once,
//! and a signed-in user's profile is recorded once per app load.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, SessionStatus};

/// Where signed-out visitors land.
pub const SIGN_IN_PATH: &str = "/";

/// Redirect only on the transition into `Unauthenticated`, and never during
/// logout, which reloads the page itself.
pub fn should_redirect_unauth(previous: Option<SessionStatus>, state: &AuthState) -> bool {
    !state.logging_out
        && state.status() == SessionStatus::Unauthenticated
        && previous != Some(SessionStatus::Unauthenticated)
}

pub fn should_record_user(state: &AuthState) -> bool {
    state.status() == SessionStatus::Authenticated && !state.recorded
}

/// Install the gate on the current page.
pub fn install_auth_gate<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |previous: Option<SessionStatus>| {
        let state = auth.get();
        if should_redirect_unauth(previous, &state) {
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        }
        if should_record_user(&state) {
            auth.update(|s| s.recorded = true);
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(crate::net::api::record_user());
        }
        state.status()
    });
}
