//! JSON bodies exchanged between the browser and the OptiCloud server.

use serde::{Deserialize, Serialize};

use crate::metrics::MetricsDocument;

pub const SUBMIT_NOT_AUTHENTICATED: &str = "You must be logged in to submit the Role ARN.";
pub const SUBMIT_INVALID_ARN: &str = "Invalid Role ARN. Please check the format.";
pub const SUBMIT_SUCCESS: &str = "Role ARN successfully submitted.";
pub const SUBMIT_FAILED: &str = "Failed to submit Role ARN.";
pub const SUBMIT_ERROR: &str = "An error occurred while submitting the Role ARN.";
pub const ROLE_ARN_FAILED: &str = "Failed to fetch Role ARN.";
pub const ROLE_ARN_ERROR: &str = "An error occurred while fetching the Role ARN.";
pub const METRICS_FAILED: &str = "Failed to fetch metrics.";
pub const METRICS_ERROR: &str = "An error occurred while fetching metrics.";

/// `POST /api/role-arn` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRoleArnRequest {
    #[serde(rename = "roleArn")]
    pub role_arn: String,
}

/// Result of a role ARN submission, shown verbatim under the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub ok: bool,
    pub message: String,
}

impl SubmitOutcome {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { ok: true, message: message.into() }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { ok: false, message: message.into() }
    }
}

/// `GET /api/role-arn` response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleArnResponse {
    #[serde(rename = "roleArn", default)]
    pub role_arn: Option<String>,
}

/// `GET /api/metrics` response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub aws_metrics: MetricsDocument,
}

/// Error body for any failed API call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
