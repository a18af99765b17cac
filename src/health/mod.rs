//! Dependency health checking.
//!
//! Two independent policies live here and are never conflated:
//!
//! - [`aggregator`]: connectivity-based fan-out over dependency probes,
//!   reducing to `healthy`/`unhealthy`.
//! - [`utilization`]: resource-threshold classification yielding
//!   `healthy`/`degraded`/`unhealthy`.

pub mod aggregator;
pub mod probe;
pub mod utilization;

pub use aggregator::{HealthAggregator, HealthReport, OverallStatus};
pub use probe::{
    DependencyProbe, DependencyProbeResult, DependencyStatus, PostgresProbe, RedisProbe,
};
pub use utilization::{UtilizationReport, UtilizationStatus, UtilizationThresholds};
