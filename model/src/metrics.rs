//! Backend metrics document and the bar charts derived from it.
//!
//! DESIGN
//! ======
//! The document is treated as immutable render input. Chart derivation only
//! reshapes values; it never computes new numbers, so what the dashboard
//! shows is exactly what the backend sent.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Fill colors for the current and optimized bars, in that order.
pub const CHART_PALETTE: [&str; 2] = ["rgba(255, 99, 132, 0.6)", "rgba(75, 192, 192, 0.6)"];

pub const CURRENT_LABEL: &str = "Current Usage";
pub const OPTIMIZED_LABEL: &str = "Optimized Usage";

/// One metric's recommendation with current and optimized usage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "Recommendation", default)]
    pub recommendation: String,
    #[serde(rename = "Current_Usage")]
    pub current_usage: f64,
    #[serde(rename = "Optimized_Usage")]
    pub optimized_usage: f64,
}

/// The per-category recommendations block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRecommendations {
    #[serde(rename = "CPU_Utilization", default, skip_serializing_if = "Option::is_none")]
    pub cpu_utilization: Option<Recommendation>,
    #[serde(rename = "Disk_IO", default, skip_serializing_if = "Option::is_none")]
    pub disk_io: Option<Recommendation>,
    #[serde(rename = "Network_Usage", default, skip_serializing_if = "Option::is_none")]
    pub network_usage: Option<Recommendation>,
    #[serde(rename = "Instance_Health", default, skip_serializing_if = "Option::is_none")]
    pub instance_health: Option<Recommendation>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CarbonFootprint {
    #[serde(rename = "Reduction_Percentage")]
    pub reduction_percentage: f64,
}

/// Metrics payload returned by the backend for one user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsDocument {
    #[serde(rename = "Optimization_Recommendations", default)]
    pub recommendations: OptimizationRecommendations,
    #[serde(rename = "Carbon_Footprint_Reduction", default, skip_serializing_if = "Option::is_none")]
    pub carbon_footprint: Option<CarbonFootprint>,
}

/// The four metric categories, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    CpuUtilization,
    DiskIo,
    NetworkUsage,
    InstanceHealth,
}

impl MetricKind {
    pub const ALL: [Self; 4] = [Self::CpuUtilization, Self::DiskIo, Self::NetworkUsage, Self::InstanceHealth];

    /// Key used by the backend document.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::CpuUtilization => "CPU_Utilization",
            Self::DiskIo => "Disk_IO",
            Self::NetworkUsage => "Network_Usage",
            Self::InstanceHealth => "Instance_Health",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::CpuUtilization => "CPU Utilization",
            Self::DiskIo => "Disk IO",
            Self::NetworkUsage => "Network Usage",
            Self::InstanceHealth => "Instance Health",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Render input for one metric chart: current vs optimized.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChart {
    pub kind: MetricKind,
    pub title: &'static str,
    pub recommendation: String,
    pub bars: [Bar; 2],
}

impl BarChart {
    #[must_use]
    pub fn from_recommendation(kind: MetricKind, rec: &Recommendation) -> Self {
        Self {
            kind,
            title: kind.title(),
            recommendation: rec.recommendation.clone(),
            bars: [
                Bar { label: CURRENT_LABEL, value: rec.current_usage, color: CHART_PALETTE[0] },
                Bar { label: OPTIMIZED_LABEL, value: rec.optimized_usage, color: CHART_PALETTE[1] },
            ],
        }
    }
}

impl MetricsDocument {
    /// Recommendation for one category, if the backend sent it.
    #[must_use]
    pub fn metric(&self, kind: MetricKind) -> Option<&Recommendation> {
        let recs = &self.recommendations;
        match kind {
            MetricKind::CpuUtilization => recs.cpu_utilization.as_ref(),
            MetricKind::DiskIo => recs.disk_io.as_ref(),
            MetricKind::NetworkUsage => recs.network_usage.as_ref(),
            MetricKind::InstanceHealth => recs.instance_health.as_ref(),
        }
    }

    /// One chart per metric present in the document, in display order.
    #[must_use]
    pub fn charts(&self) -> Vec<BarChart> {
        MetricKind::ALL
            .into_iter()
            .filter_map(|kind| self.metric(kind).map(|rec| BarChart::from_recommendation(kind, rec)))
            .collect()
    }

    #[must_use]
    pub fn carbon_reduction(&self) -> Option<f64> {
        self.carbon_footprint.as_ref().map(|c| c.reduction_percentage)
    }
}
