//! Shared OptiCloud domain types for the `server` and `client` crates.
//!
//! This crate owns everything both sides must agree on: the signed-in user
//! profile, the role ARN validator, the backend metrics document and the
//! chart data derived from it, and the JSON bodies exchanged between the
//! browser and the server.

pub mod api;
pub mod arn;
pub mod metrics;
pub mod submission;
pub mod user;

pub use arn::{ArnError, RoleArn, validate_arn};
pub use metrics::{Bar, BarChart, CHART_PALETTE, CarbonFootprint, MetricKind, MetricsDocument, Recommendation};
pub use submission::{SubmitRejection, check_submission};
pub use user::User;
