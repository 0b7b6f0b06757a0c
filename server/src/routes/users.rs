//! User profile recording route.

use axum::extract::State;
use axum::http::StatusCode;

use super::auth::AuthUser;
use crate::services::user_record;
use crate::state::AppState;

/// `POST /api/user-data`: forward the session profile to the backend, at most
/// once per session. Always answers `202` for a signed-in caller.
pub async fn record_user(State(state): State<AppState>, auth: AuthUser) -> StatusCode {
    // Detached; the outcome is only logged.
    let _ = user_record::record_user_once(&state, &auth.token, &auth.user);
    StatusCode::ACCEPTED
}
