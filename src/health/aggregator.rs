//! Fan-out/fan-in health aggregation over dependency probes.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use serde::Serialize;
use tokio::time::timeout;
use utoipa::ToSchema;

use super::probe::{DependencyProbe, DependencyProbeResult};

/// Reduced status of the connectivity health check. This policy is binary;
/// `degraded` belongs to the utilization variant only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Healthy,
    Unhealthy,
}

/// One probe result per configured dependency plus the reduced status.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthReport {
    pub status: OverallStatus,
    pub dependencies: Vec<DependencyProbeResult>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == OverallStatus::Healthy
    }
}

/// Fans out one probe per dependency and reduces the results.
pub struct HealthAggregator {
    probes: Vec<Arc<dyn DependencyProbe>>,
    probe_timeout: Duration,
}

impl HealthAggregator {
    pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(probe_timeout: Duration) -> Self {
        Self {
            probes: Vec::new(),
            probe_timeout,
        }
    }

    pub fn register(mut self, probe: Arc<dyn DependencyProbe>) -> Self {
        self.probes.push(probe);
        self
    }

    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }

    /// Probe every dependency concurrently and reduce to one report.
    ///
    /// Each probe runs on its own task bounded by the configured timeout, so
    /// total latency is bounded by the slowest single probe instead of the
    /// sum. A timeout or probe error marks that slot unhealthy for this
    /// invocation only; the next check re-probes fresh. No retries happen
    /// within one invocation, and nothing a probe does can propagate out of
    /// this method as a fault.
    pub async fn check(&self) -> HealthReport {
        let limit = self.probe_timeout;
        let tasks: Vec<_> = self
            .probes
            .iter()
            .map(|probe| {
                let probe = Arc::clone(probe);
                tokio::spawn(async move {
                    let name = probe.name().to_string();
                    let start = Instant::now();
                    let outcome = timeout(limit, probe.probe()).await;
                    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
                    match outcome {
                        Ok(Ok(())) => DependencyProbeResult::healthy(name, latency_ms),
                        Ok(Err(error)) => {
                            DependencyProbeResult::unhealthy(name, latency_ms, error)
                        }
                        // The probe future is dropped here; a hung dependency
                        // cannot hold up the aggregate response.
                        Err(_) => DependencyProbeResult::unhealthy(
                            name,
                            latency_ms,
                            format!("probe timed out after {}ms", limit.as_millis()),
                        ),
                    }
                })
            })
            .collect();

        let names: Vec<String> = self.probes.iter().map(|p| p.name().to_string()).collect();
        let mut dependencies = Vec::with_capacity(tasks.len());
        for (name, joined) in names.into_iter().zip(join_all(tasks).await) {
            dependencies.push(match joined {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("health probe task for {} failed: {}", name, e);
                    DependencyProbeResult::unhealthy(name, 0.0, "probe task panicked")
                }
            });
        }

        let status = if dependencies.iter().all(|r| r.is_healthy()) {
            OverallStatus::Healthy
        } else {
            OverallStatus::Unhealthy
        };

        HealthReport {
            status,
            dependencies,
        }
    }
}
