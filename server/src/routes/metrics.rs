//! Metrics route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use model::api::{ErrorBody, MetricsResponse};

use super::auth::AuthUser;
use crate::services::metrics as metrics_svc;
use crate::state::AppState;

/// `GET /api/metrics`: metrics document for the signed-in user.
pub async fn get_metrics(State(state): State<AppState>, auth: AuthUser) -> Response {
    match metrics_svc::fetch_metrics(state.backend.as_ref(), &auth.user).await {
        Ok(aws_metrics) => Json(MetricsResponse { aws_metrics }).into_response(),
        Err(message) => (StatusCode::BAD_GATEWAY, Json(ErrorBody { message })).into_response(),
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
