//! Utilization-based health variant.
//!
//! Independent of the connectivity aggregator: classifies host memory usage
//! against configured thresholds. This is the only policy that can yield
//! `degraded`; the connectivity check stays binary.

use serde::Serialize;
use sysinfo::System;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Memory usage thresholds, percentages of total host memory.
#[derive(Debug, Clone, Copy)]
pub struct UtilizationThresholds {
    pub memory_degraded_percent: f64,
    pub memory_unhealthy_percent: f64,
}

impl Default for UtilizationThresholds {
    fn default() -> Self {
        Self {
            memory_degraded_percent: 80.0,
            memory_unhealthy_percent: 95.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UtilizationReport {
    pub status: UtilizationStatus,
    pub memory_used_percent: f64,
    pub memory_degraded_percent: f64,
    pub memory_unhealthy_percent: f64,
}

/// Classify a usage percentage against the thresholds.
///
/// Usage at or above the unhealthy threshold is failing outright; at or
/// above the degraded threshold the service still works but is running hot.
pub fn classify(used_percent: f64, thresholds: &UtilizationThresholds) -> UtilizationStatus {
    if used_percent >= thresholds.memory_unhealthy_percent {
        UtilizationStatus::Unhealthy
    } else if used_percent >= thresholds.memory_degraded_percent {
        UtilizationStatus::Degraded
    } else {
        UtilizationStatus::Healthy
    }
}

/// Sample host memory usage and classify it.
pub fn check(thresholds: &UtilizationThresholds) -> UtilizationReport {
    let mut sys = System::new();
    sys.refresh_memory();

    let total = sys.total_memory();
    let memory_used_percent = if total == 0 {
        0.0
    } else {
        sys.used_memory() as f64 / total as f64 * 100.0
    };

    UtilizationReport {
        status: classify(memory_used_percent, thresholds),
        memory_used_percent,
        memory_degraded_percent: thresholds.memory_degraded_percent,
        memory_unhealthy_percent: thresholds.memory_unhealthy_percent,
    }
}
