//! Health check handlers

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::health::{HealthReport, UtilizationReport, UtilizationStatus, utilization};

use super::super::state::AppState;

/// Connectivity health check
///
/// GET /health
///
/// Fans out one probe per configured dependency, bounded by the probe
/// timeout, and reduces to a binary status. Every invocation re-probes;
/// nothing is cached between calls.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "All dependencies reachable", body = HealthReport, content_type = "application/json"),
        (status = 503, description = "At least one dependency unreachable", body = HealthReport)
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthReport>) {
    let report = state.aggregator.check().await;

    if report.is_healthy() {
        (StatusCode::OK, Json(report))
    } else {
        for result in report.dependencies.iter().filter(|r| !r.is_healthy()) {
            tracing::warn!(
                dependency = %result.name,
                error = result.error.as_deref().unwrap_or("unknown"),
                "dependency probe failed"
            );
        }
        (StatusCode::SERVICE_UNAVAILABLE, Json(report))
    }
}

/// Utilization health check
///
/// GET /healthz
///
/// Classifies host memory usage against the configured thresholds. This is
/// the only endpoint that can report `degraded`; it is independent of the
/// connectivity check and the two are never combined.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Within thresholds (healthy or degraded)", body = UtilizationReport, content_type = "application/json"),
        (status = 503, description = "Memory usage above the unhealthy threshold", body = UtilizationReport)
    ),
    tag = "System"
)]
pub async fn healthz(State(state): State<Arc<AppState>>) -> (StatusCode, Json<UtilizationReport>) {
    let report = utilization::check(&state.utilization);

    let status = match report.status {
        UtilizationStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        UtilizationStatus::Healthy | UtilizationStatus::Degraded => StatusCode::OK,
    };

    (status, Json(report))
}
