//! reqwest-backed client for the external OptiCloud backend.
//!
//! Thin wrapper over four JSON POST endpoints. Response interpretation lives
//! in pure functions (`rejection`, `parse_*`) so it can be tested without a
//! live server.

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use model::api::{MetricsResponse, RoleArnResponse};
use model::{MetricsDocument, RoleArn, User};
use serde::Serialize;

use super::config::BackendConfig;
use super::types::{BackendError, MessageReply, OptiBackend, RecordUserBody, SubmitRoleArnBody, UserIdBody};

pub(crate) const RECORD_USER_PATH: &str = "/user-data/";
pub(crate) const SUBMIT_ROLE_ARN_PATH: &str = "/api/receive-role-arn/";
pub(crate) const FETCH_ROLE_ARN_PATH: &str = "/api/get-user-role-arn/";
pub(crate) const FETCH_METRICS_PATH: &str = "/api/get-user-metrics/";

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` as JSON and return the raw body of a 2xx response.
    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String, BackendError> {
        let response = self
            .http
            .post(endpoint(&self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(rejection(status, &text));
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl OptiBackend for HttpBackend {
    async fn record_user(&self, user: &User) -> Result<(), BackendError> {
        self.post_json(RECORD_USER_PATH, &RecordUserBody { user })
            .await
            .map(|_| ())
    }

    async fn submit_role_arn(&self, role_arn: &RoleArn, user: &User) -> Result<Option<String>, BackendError> {
        let body = SubmitRoleArnBody { role_arn: role_arn.as_str(), user };
        let text = self.post_json(SUBMIT_ROLE_ARN_PATH, &body).await?;
        Ok(parse_message(&text))
    }

    async fn fetch_role_arn(&self, user_id: &str) -> Result<Option<String>, BackendError> {
        let text = self
            .post_json(FETCH_ROLE_ARN_PATH, &UserIdBody { user_id })
            .await?;
        parse_role_arn(&text)
    }

    async fn fetch_metrics(&self, user_id: &str) -> Result<MetricsDocument, BackendError> {
        let text = self
            .post_json(FETCH_METRICS_PATH, &UserIdBody { user_id })
            .await?;
        parse_metrics(&text)
    }
}

// =============================================================================
// RESPONSE HELPERS
// =============================================================================

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Build a [`BackendError::Rejected`], lifting `message` out of a JSON body.
pub(crate) fn rejection(status: u16, body: &str) -> BackendError {
    let message = serde_json::from_str::<MessageReply>(body)
        .ok()
        .and_then(|reply| reply.message);
    BackendError::Rejected { status, message }
}

/// Success bodies are not always JSON; a missing message is not an error.
pub(crate) fn parse_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageReply>(body)
        .ok()
        .and_then(|reply| reply.message)
        .filter(|message| !message.trim().is_empty())
}

pub(crate) fn parse_role_arn(body: &str) -> Result<Option<String>, BackendError> {
    serde_json::from_str::<RoleArnResponse>(body)
        .map(|reply| reply.role_arn.filter(|arn| !arn.is_empty()))
        .map_err(|e| BackendError::Parse(e.to_string()))
}

pub(crate) fn parse_metrics(body: &str) -> Result<MetricsDocument, BackendError> {
    serde_json::from_str::<MetricsResponse>(body)
        .map(|reply| reply.aws_metrics)
        .map_err(|e| BackendError::Parse(e.to_string()))
}
