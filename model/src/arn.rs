//! IAM role ARN validation.
//!
//! A [`RoleArn`] can only be built by passing the validator, so any value of
//! that type is safe to forward to the backend.

#[cfg(test)]
#[path = "arn_test.rs"]
mod tests;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

static ROLE_ARN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:aws:iam::[0-9]{12}:role/[A-Za-z_0-9+=,.@\-/]+$").expect("role ARN pattern compiles")
});

/// Error returned by [`RoleArn::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArnError {
    #[error("role ARN is empty")]
    Empty,
    #[error("malformed role ARN: {0}")]
    Malformed(String),
}

/// Whether `raw` (ignoring surrounding whitespace) is a well-formed IAM role ARN.
#[must_use]
pub fn validate_arn(raw: &str) -> bool {
    ROLE_ARN_RE.is_match(raw.trim())
}

/// A validated IAM role ARN, e.g. `arn:aws:iam::123456789012:role/OptiCloud`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoleArn(String);

impl RoleArn {
    /// Validate and wrap a user-supplied ARN.
    ///
    /// # Errors
    ///
    /// Returns [`ArnError::Empty`] for blank input and [`ArnError::Malformed`]
    /// when the value does not match the role ARN pattern.
    pub fn parse(raw: &str) -> Result<Self, ArnError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ArnError::Empty);
        }
        if !ROLE_ARN_RE.is_match(trimmed) {
            return Err(ArnError::Malformed(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 12-digit AWS account id embedded in the ARN.
    #[must_use]
    pub fn account_id(&self) -> &str {
        // Validated shape: "arn:aws:iam::" + 12 digits.
        &self.0[13..25]
    }

    /// Role name including any path, e.g. `service-role/Reader`.
    #[must_use]
    pub fn role_name(&self) -> &str {
        &self.0[31..]
    }
}

impl fmt::Display for RoleArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RoleArn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
