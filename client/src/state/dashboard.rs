//! Dashboard page state.
//!
//! The page moves `Loading -> Redirecting` when no session exists, or
//! `Loading -> FetchingData -> Ready` once metrics arrive. The role ARN is
//! fetched independently and never holds up the charts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use model::{BarChart, MetricsDocument};

use super::auth::SessionStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPhase {
    Loading,
    Redirecting,
    FetchingData,
    Ready,
}

/// What the dashboard shows where the stored role ARN goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleArnLine {
    Stored(String),
    /// Nothing on file; the page links to setup.
    Missing,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub role_arn: Option<String>,
    pub metrics: Option<MetricsDocument>,
    /// Metrics fetch error, shown next to the loading view.
    pub metrics_message: Option<String>,
    /// Role ARN fetch error, shown in place of the stored ARN.
    pub role_arn_message: Option<String>,
}

impl DashboardState {
    #[must_use]
    pub fn phase(&self, session: SessionStatus) -> DashboardPhase {
        match session {
            SessionStatus::Loading => DashboardPhase::Loading,
            SessionStatus::Unauthenticated => DashboardPhase::Redirecting,
            SessionStatus::Authenticated if self.metrics.is_some() => DashboardPhase::Ready,
            SessionStatus::Authenticated => DashboardPhase::FetchingData,
        }
    }

    pub fn apply_metrics(&mut self, result: Result<MetricsDocument, String>) {
        match result {
            Ok(metrics) => {
                self.metrics = Some(metrics);
                self.metrics_message = None;
            }
            Err(message) => self.metrics_message = Some(message),
        }
    }

    pub fn apply_role_arn(&mut self, result: Result<Option<String>, String>) {
        match result {
            Ok(role_arn) => {
                self.role_arn = role_arn;
                self.role_arn_message = None;
            }
            Err(message) => {
                self.role_arn = None;
                self.role_arn_message = Some(message);
            }
        }
    }

    /// A failed lookup is reported as such, never as "nothing on file".
    #[must_use]
    pub fn role_arn_line(&self) -> RoleArnLine {
        match (&self.role_arn_message, &self.role_arn) {
            (Some(message), _) => RoleArnLine::Failed(message.clone()),
            (None, Some(role_arn)) => RoleArnLine::Stored(role_arn.clone()),
            (None, None) => RoleArnLine::Missing,
        }
    }

    #[must_use]
    pub fn charts(&self) -> Vec<BarChart> {
        self.metrics.as_ref().map(MetricsDocument::charts).unwrap_or_default()
    }
}
