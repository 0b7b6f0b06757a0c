//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the auth gate and user-aware components to coordinate sign-in
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use model::User;

/// Where the session lookup stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Current user plus lookup progress. Starts out loading until
/// `/api/auth/me` answers.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    /// Set once the profile has been sent to `/api/user-data`.
    pub recorded: bool,
    /// Logout request in flight; a full page reload follows.
    pub logging_out: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, recorded: false, logging_out: false }
    }
}

impl AuthState {
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match (&self.user, self.loading) {
            (_, true) => SessionStatus::Loading,
            (Some(_), false) => SessionStatus::Authenticated,
            (None, false) => SessionStatus::Unauthenticated,
        }
    }

    /// Finish loading with the looked-up user, if any.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Mark logout as started. Returns `false` if one is already running.
    pub fn begin_logout(&mut self) -> bool {
        if self.logging_out {
            return false;
        }
        self.logging_out = true;
        true
    }
}
