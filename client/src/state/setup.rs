//! AWS setup page state: the reveal toggle, the ARN input and the last
//! submission message.

#[cfg(test)]
#[path = "setup_test.rs"]
mod setup_test;

use model::api::SubmitOutcome;
use model::{RoleArn, User, check_submission};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupState {
    pub show_input: bool,
    pub role_arn: String,
    pub message: Option<String>,
    pub loading: bool,
}

impl SetupState {
    pub fn reveal(&mut self) {
        self.show_input = true;
    }

    /// Check the local preconditions. On success the request is marked in
    /// flight and the validated ARN is returned; on failure the message is
    /// set and nothing should be sent.
    pub fn begin_submit(&mut self, user: Option<&User>) -> Option<RoleArn> {
        if self.loading {
            return None;
        }
        match check_submission(user, &self.role_arn) {
            Ok(role_arn) => {
                self.message = None;
                self.loading = true;
                Some(role_arn)
            }
            Err(rejection) => {
                self.message = Some(rejection.message().to_owned());
                None
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.loading = false;
        self.message = Some(outcome.message);
    }
}
