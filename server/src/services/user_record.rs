//! Send the signed-in profile to the backend once per session.
//!
//! The backend treats `/user-data/` as a profile upsert. Pages may ask for it
//! on every mount; the session's `recorded` flag keeps it to one call.

use model::User;
use tokio::task::JoinHandle;

use crate::state::AppState;

/// Fire the record-user call on a detached task if this session has not
/// recorded yet. Returns the task handle when a call was started.
///
/// Failures are logged and never surfaced to the caller.
pub fn record_user_once(state: &AppState, token: &str, user: &User) -> Option<JoinHandle<()>> {
    if !state.sessions.mark_recorded(token) {
        return None;
    }

    let backend = state.backend.clone();
    let user = user.clone();
    Some(tokio::spawn(async move {
        match backend.record_user(&user).await {
            Ok(()) => tracing::debug!(user_id = user.user_id().unwrap_or("-"), "user profile recorded"),
            Err(e) => tracing::warn!(error = %e, "recording user profile failed"),
        }
    }))
}
