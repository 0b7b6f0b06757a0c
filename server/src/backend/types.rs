//! Backend client trait, error type, and request/response bodies.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use model::{MetricsDocument, RoleArn, User};
use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend answered with a non-success status.
    #[error("backend rejected request: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response (connect, timeout, body read).
    #[error("backend request failed: {0}")]
    Request(String),

    /// A success response whose body did not match the expected shape.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl BackendError {
    /// Text to show the user: the backend's own message for a rejection, else
    /// `rejected` for other rejections and `failed` for transport errors.
    #[must_use]
    pub fn user_message(&self, rejected: &str, failed: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } => rejected.to_owned(),
            Self::Request(_) | Self::Parse(_) | Self::HttpClientBuild(_) => failed.to_owned(),
        }
    }
}

// =============================================================================
// WIRE BODIES
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct RecordUserBody<'a> {
    pub user: &'a User,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitRoleArnBody<'a> {
    #[serde(rename = "roleArn")]
    pub role_arn: &'a str,
    pub user: &'a User,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserIdBody<'a> {
    pub user_id: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageReply {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// CLIENT TRAIT
// =============================================================================

/// Calls made to the external OptiCloud backend.
///
/// Implemented by [`super::HttpBackend`] in production and by mocks in tests.
#[async_trait::async_trait]
pub trait OptiBackend: Send + Sync {
    /// Send the signed-in user's profile (`POST /user-data/`).
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails or is rejected.
    async fn record_user(&self, user: &User) -> Result<(), BackendError>;

    /// Store the user's role ARN (`POST /api/receive-role-arn/`).
    /// Returns the backend's message, if it sent one.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails or is rejected.
    async fn submit_role_arn(&self, role_arn: &RoleArn, user: &User) -> Result<Option<String>, BackendError>;

    /// Fetch the stored role ARN for a user (`POST /api/get-user-role-arn/`).
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails, is rejected, or the
    /// body is malformed.
    async fn fetch_role_arn(&self, user_id: &str) -> Result<Option<String>, BackendError>;

    /// Fetch the metrics document for a user (`POST /api/get-user-metrics/`).
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails, is rejected, or the
    /// body is malformed.
    async fn fetch_metrics(&self, user_id: &str) -> Result<MetricsDocument, BackendError>;
}
