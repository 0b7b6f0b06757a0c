//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): inert stubs, since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs with user-visible messages instead of
//! panics, so a failed fetch degrades the page rather than breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use model::api::SubmitOutcome;
#[cfg(any(test, feature = "hydrate"))]
use model::api::{ErrorBody, SUBMIT_ERROR};
use model::{MetricsDocument, User};

pub const ME_PATH: &str = "/api/auth/me";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const USER_DATA_PATH: &str = "/api/user-data";
pub const ROLE_ARN_PATH: &str = "/api/role-arn";
pub const METRICS_PATH: &str = "/api/metrics";

/// Message from an `ErrorBody`, or `fallback` when the body is not one.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Submission outcome from a response body, whatever the status.
#[cfg(any(test, feature = "hydrate"))]
fn submit_outcome(body: &str) -> SubmitOutcome {
    serde_json::from_str(body).unwrap_or_else(|_| SubmitOutcome::failure(SUBMIT_ERROR))
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_PATH).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the session via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT_PATH).send().await;
    }
}

/// Ask the server to forward the session profile to the backend.
pub async fn record_user() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(USER_DATA_PATH).send().await {
            log::warn!("recording user failed: {e}");
        }
    }
}

/// Submit a role ARN; the outcome message is shown under the form.
pub async fn submit_role_arn(role_arn: &str) -> SubmitOutcome {
    #[cfg(feature = "hydrate")]
    {
        let body = model::api::SubmitRoleArnRequest { role_arn: role_arn.to_owned() };
        let request = match gloo_net::http::Request::post(ROLE_ARN_PATH).json(&body) {
            Ok(request) => request,
            Err(e) => {
                log::error!("encoding role ARN request failed: {e}");
                return SubmitOutcome::failure(SUBMIT_ERROR);
            }
        };
        match request.send().await {
            Ok(resp) => submit_outcome(&resp.text().await.unwrap_or_default()),
            Err(e) => {
                log::error!("submitting role ARN failed: {e}");
                SubmitOutcome::failure(SUBMIT_ERROR)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = role_arn;
        SubmitOutcome::failure("not available on server")
    }
}

/// Role ARN stored for the signed-in user.
///
/// # Errors
///
/// Returns a user-visible message if the request fails.
pub async fn fetch_role_arn() -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        use model::api::{ROLE_ARN_ERROR, ROLE_ARN_FAILED, RoleArnResponse};

        let resp = gloo_net::http::Request::get(ROLE_ARN_PATH)
            .send()
            .await
            .map_err(|_| ROLE_ARN_ERROR.to_owned())?;
        if !resp.ok() {
            return Err(error_message(&resp.text().await.unwrap_or_default(), ROLE_ARN_FAILED));
        }
        let body: RoleArnResponse = resp.json().await.map_err(|_| ROLE_ARN_ERROR.to_owned())?;
        Ok(body.role_arn)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Metrics document for the signed-in user.
///
/// # Errors
///
/// Returns a user-visible message if the request fails.
pub async fn fetch_metrics() -> Result<MetricsDocument, String> {
    #[cfg(feature = "hydrate")]
    {
        use model::api::{METRICS_ERROR, METRICS_FAILED, MetricsResponse};

        let resp = gloo_net::http::Request::get(METRICS_PATH)
            .send()
            .await
            .map_err(|_| METRICS_ERROR.to_owned())?;
        if !resp.ok() {
            return Err(error_message(&resp.text().await.unwrap_or_default(), METRICS_FAILED));
        }
        let body: MetricsResponse = resp.json().await.map_err(|_| METRICS_ERROR.to_owned())?;
        Ok(body.aws_metrics)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
