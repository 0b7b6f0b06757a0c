//! Role ARN submission and lookup.
//!
//! ERROR HANDLING
//! ==============
//! Precondition failures (not signed in, malformed ARN) are answered locally
//! and never reach the backend. Backend rejections surface the backend's own
//! message when it sends one; transport failures get a generic message and a
//! log line. Nothing is retried.

#[cfg(test)]
#[path = "role_arn_test.rs"]
mod tests;

use model::api::{ROLE_ARN_ERROR, ROLE_ARN_FAILED, SUBMIT_ERROR, SUBMIT_FAILED, SUBMIT_SUCCESS, SubmitOutcome};
use model::{SubmitRejection, User, check_submission};

use crate::backend::{BackendError, OptiBackend};

/// How a submission ended; routes map this to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Submitted,
    Refused(SubmitRejection),
    BackendRejected,
    BackendUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub kind: SubmissionKind,
    pub outcome: SubmitOutcome,
}

impl Submission {
    fn refused(rejection: SubmitRejection) -> Self {
        Self { kind: SubmissionKind::Refused(rejection), outcome: SubmitOutcome::failure(rejection.message()) }
    }
}

/// Validate and forward a role ARN for `user`.
pub async fn submit_role_arn(backend: &dyn OptiBackend, user: Option<&User>, raw_arn: &str) -> Submission {
    let role_arn = match check_submission(user, raw_arn) {
        Ok(role_arn) => role_arn,
        Err(rejection) => return Submission::refused(rejection),
    };
    let Some(user) = user else {
        return Submission::refused(SubmitRejection::NotAuthenticated);
    };

    match backend.submit_role_arn(&role_arn, user).await {
        Ok(message) => {
            tracing::info!(account_id = role_arn.account_id(), role = role_arn.role_name(), "role ARN submitted");
            Submission {
                kind: SubmissionKind::Submitted,
                outcome: SubmitOutcome::success(message.unwrap_or_else(|| SUBMIT_SUCCESS.to_owned())),
            }
        }
        Err(e @ BackendError::Rejected { .. }) => {
            tracing::warn!(error = %e, "backend rejected role ARN");
            Submission {
                kind: SubmissionKind::BackendRejected,
                outcome: SubmitOutcome::failure(e.user_message(SUBMIT_FAILED, SUBMIT_ERROR)),
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "error submitting role ARN");
            Submission {
                kind: SubmissionKind::BackendUnavailable,
                outcome: SubmitOutcome::failure(e.user_message(SUBMIT_FAILED, SUBMIT_ERROR)),
            }
        }
    }
}

/// Look up the role ARN previously stored for `user`.
///
/// # Errors
///
/// Returns a user-visible message when the user has no id or the backend call
/// fails.
pub async fn fetch_role_arn(backend: &dyn OptiBackend, user: &User) -> Result<Option<String>, String> {
    let Some(user_id) = user.user_id() else {
        tracing::warn!("session user has no id; cannot fetch role ARN");
        return Err(ROLE_ARN_FAILED.to_owned());
    };

    backend.fetch_role_arn(user_id).await.map_err(|e| {
        tracing::warn!(error = %e, "fetching role ARN failed");
        e.user_message(ROLE_ARN_FAILED, ROLE_ARN_ERROR)
    })
}
