//! Preconditions checked before a role ARN leaves the browser or the server.

use crate::api::{SUBMIT_INVALID_ARN, SUBMIT_NOT_AUTHENTICATED};
use crate::arn::RoleArn;
use crate::user::User;

/// Why a submission was refused before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("{}", SUBMIT_NOT_AUTHENTICATED)]
    NotAuthenticated,
    #[error("{}", SUBMIT_INVALID_ARN)]
    InvalidArn,
}

impl SubmitRejection {
    /// User-visible message for this rejection.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotAuthenticated => SUBMIT_NOT_AUTHENTICATED,
            Self::InvalidArn => SUBMIT_INVALID_ARN,
        }
    }
}

/// Check that a submission may be sent: the user is signed in, then the ARN is
/// well formed.
///
/// # Errors
///
/// Returns the first failed precondition.
pub fn check_submission(user: Option<&User>, raw_arn: &str) -> Result<RoleArn, SubmitRejection> {
    if user.is_none() {
        return Err(SubmitRejection::NotAuthenticated);
    }
    RoleArn::parse(raw_arn).map_err(|_| SubmitRejection::InvalidArn)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "arn:aws:iam::123456789012:role/MyRole";

    #[test]
    fn anonymous_is_rejected_before_format_check() {
        assert_eq!(check_submission(None, GOOD), Err(SubmitRejection::NotAuthenticated));
        assert_eq!(check_submission(None, "garbage"), Err(SubmitRejection::NotAuthenticated));
    }

    #[test]
    fn malformed_arn_is_rejected_for_signed_in_user() {
        let user = User::default();
        assert_eq!(check_submission(Some(&user), "not-an-arn"), Err(SubmitRejection::InvalidArn));
    }

    #[test]
    fn valid_submission_yields_role_arn() {
        let user = User::default();
        let arn = check_submission(Some(&user), GOOD).unwrap();
        assert_eq!(arn.as_str(), GOOD);
    }

    #[test]
    fn messages_are_the_shared_api_strings() {
        assert_eq!(SubmitRejection::NotAuthenticated.message(), "You must be logged in to submit the Role ARN.");
        assert_eq!(SubmitRejection::InvalidArn.message(), "Invalid Role ARN. Please check the format.");
        assert_eq!(SubmitRejection::NotAuthenticated.to_string(), SUBMIT_NOT_AUTHENTICATED);
        assert_eq!(SubmitRejection::InvalidArn.to_string(), SUBMIT_INVALID_ARN);
    }

    #[test]
    fn message_matches_display() {
        for rejection in [SubmitRejection::NotAuthenticated, SubmitRejection::InvalidArn] {
            assert_eq!(rejection.to_string(), rejection.message());
        }
    }
}
