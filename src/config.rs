use serde::{Deserialize, Serialize};
use std::fs;

use crate::models::CustomerIdKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    pub gateway: GatewayConfig,
    /// Customer id convention for this deployment.
    #[serde(default)]
    pub customer_id_kind: CustomerIdKind,
    /// PostgreSQL connection URL for the relational-store probe.
    #[serde(default)]
    pub postgres_url: Option<String>,
    /// Redis connection URL for the cache probe.
    #[serde(default)]
    pub redis_url: Option<String>,
    #[serde(default)]
    pub health: HealthConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthConfig {
    /// Hard per-probe timeout for the connectivity check.
    pub probe_timeout_secs: u64,
    /// Memory usage at or above this is reported as degraded.
    pub memory_degraded_percent: f64,
    /// Memory usage at or above this is reported as unhealthy.
    pub memory_unhealthy_percent: f64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            probe_timeout_secs: 5,
            memory_degraded_percent: 80.0,
            memory_unhealthy_percent: 95.0,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = serde_yaml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path, source })?;
        Ok(Self::with_env_overrides(config))
    }

    /// Deployment URLs from the environment win over file values.
    fn with_env_overrides(mut config: AppConfig) -> AppConfig {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.postgres_url = Some(url);
        }
        if let Ok(url) = std::env::var("REDIS_URL") {
            config.redis_url = Some(url);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_parses_with_defaults() {
        let yaml = r#"
log_level: info
log_dir: ./logs
log_file: intake.log
use_json: false
rotation: daily
enable_tracing: true
gateway:
  host: 127.0.0.1
  port: 8080
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.customer_id_kind, CustomerIdKind::Text);
        assert_eq!(config.health.probe_timeout_secs, 5);
        assert_eq!(config.health.memory_degraded_percent, 80.0);
        assert!(config.postgres_url.is_none());
        assert!(config.redis_url.is_none());
    }

    #[test]
    fn explicit_sections_override_defaults() {
        let yaml = r#"
log_level: debug
log_dir: ./logs
log_file: intake.log
use_json: true
rotation: hourly
enable_tracing: false
gateway:
  host: 0.0.0.0
  port: 9000
customer_id_kind: integer
postgres_url: postgresql://localhost:5432/mydb
redis_url: redis://localhost:6379
health:
  probe_timeout_secs: 2
  memory_degraded_percent: 70.0
  memory_unhealthy_percent: 90.0
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.customer_id_kind, CustomerIdKind::Numeric);
        assert_eq!(config.health.probe_timeout_secs, 2);
        assert_eq!(
            config.postgres_url.as_deref(),
            Some("postgresql://localhost:5432/mydb")
        );
    }
}
