//! Role ARN routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use model::SubmitRejection;
use model::api::{ErrorBody, RoleArnResponse, SubmitRoleArnRequest};

use super::auth::{AuthUser, session_from_jar};
use crate::services::role_arn::{self as role_arn_svc, SubmissionKind};
use crate::state::AppState;

/// `GET /api/role-arn`: the role ARN stored for the signed-in user.
pub async fn get_role_arn(State(state): State<AppState>, auth: AuthUser) -> Response {
    match role_arn_svc::fetch_role_arn(state.backend.as_ref(), &auth.user).await {
        Ok(role_arn) => Json(RoleArnResponse { role_arn }).into_response(),
        Err(message) => (StatusCode::BAD_GATEWAY, Json(ErrorBody { message })).into_response(),
    }
}

/// `POST /api/role-arn`: validate and forward a role ARN.
///
/// Not signed in is answered here rather than by the extractor so the body
/// still carries the user-facing message.
pub async fn submit_role_arn(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SubmitRoleArnRequest>,
) -> Response {
    let session = session_from_jar(&state, &jar);
    let user = session.as_ref().map(|(_, user)| user);

    let submission = role_arn_svc::submit_role_arn(state.backend.as_ref(), user, &body.role_arn).await;
    (submission_status(submission.kind), Json(submission.outcome)).into_response()
}

pub(crate) fn submission_status(kind: SubmissionKind) -> StatusCode {
    match kind {
        SubmissionKind::Submitted => StatusCode::OK,
        SubmissionKind::Refused(SubmitRejection::NotAuthenticated) => StatusCode::UNAUTHORIZED,
        SubmissionKind::Refused(SubmitRejection::InvalidArn) => StatusCode::BAD_REQUEST,
        SubmissionKind::BackendRejected | SubmissionKind::BackendUnavailable => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "role_arn_test.rs"]
mod tests;
