//! Metrics lookup for the dashboard.

use model::api::{METRICS_ERROR, METRICS_FAILED};
use model::{MetricsDocument, User};

use crate::backend::OptiBackend;

/// Fetch the metrics document for `user`.
///
/// # Errors
///
/// Returns a user-visible message when the user has no id or the backend call
/// fails.
pub async fn fetch_metrics(backend: &dyn OptiBackend, user: &User) -> Result<MetricsDocument, String> {
    let Some(user_id) = user.user_id() else {
        tracing::warn!("session user has no id; cannot fetch metrics");
        return Err(METRICS_FAILED.to_owned());
    };

    backend.fetch_metrics(user_id).await.map_err(|e| {
        tracing::warn!(error = %e, "fetching metrics failed");
        e.user_message(METRICS_FAILED, METRICS_ERROR)
    })
}
