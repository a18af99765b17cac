//! Dependency probes and per-probe results.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::cache::Cache;
use crate::db::Database;

/// Outcome of a single dependency probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
    Healthy,
    Unhealthy,
}

/// Result of one probe attempt.
///
/// Built fresh per health-check invocation and discarded after the response
/// is written; results are never cached between invocations.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DependencyProbeResult {
    pub name: String,
    pub status: DependencyStatus,
    /// Wall-clock duration of the probe attempt in milliseconds.
    pub latency_ms: f64,
    /// Present iff the probe failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DependencyProbeResult {
    pub fn healthy(name: impl Into<String>, latency_ms: f64) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Healthy,
            latency_ms,
            error: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, latency_ms: f64, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Unhealthy,
            latency_ms,
            error: Some(error.into()),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == DependencyStatus::Healthy
    }
}

/// A minimal connectivity check against one dependency.
///
/// Implementations attempt a trivial read-only round-trip and map every
/// failure into the error string. A probe must not panic on ordinary
/// connection errors; the aggregator treats a panicked task as unhealthy
/// but that path is reserved for bugs.
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    fn name(&self) -> &str;
    async fn probe(&self) -> Result<(), String>;
}

/// PostgreSQL probe: `SELECT 1` through the shared pool.
pub struct PostgresProbe {
    db: Arc<Database>,
}

impl PostgresProbe {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DependencyProbe for PostgresProbe {
    fn name(&self) -> &str {
        "database"
    }

    async fn probe(&self) -> Result<(), String> {
        self.db.ping().await.map_err(|e| e.to_string())
    }
}

/// Redis probe: `PING` over a fresh multiplexed connection.
pub struct RedisProbe {
    cache: Arc<Cache>,
}

impl RedisProbe {
    pub fn new(cache: Arc<Cache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl DependencyProbe for RedisProbe {
    fn name(&self) -> &str {
        "cache"
    }

    async fn probe(&self) -> Result<(), String> {
        self.cache.ping().await.map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_field_skipped_when_healthy() {
        let value = serde_json::to_value(DependencyProbeResult::healthy("database", 1.5)).unwrap();
        assert_eq!(value["status"], json!("healthy"));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn error_field_present_when_unhealthy() {
        let value =
            serde_json::to_value(DependencyProbeResult::unhealthy("cache", 3.0, "refused"))
                .unwrap();
        assert_eq!(value["status"], json!("unhealthy"));
        assert_eq!(value["error"], json!("refused"));
    }
}
