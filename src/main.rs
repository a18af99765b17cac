//! Order-intake service entry point.
//!
//! Wires configuration, logging, dependency handles and the gateway
//! together. The order store and the health aggregator are constructed
//! once here and live for the process lifetime; nothing is persisted.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use order_intake::cache::Cache;
use order_intake::config::AppConfig;
use order_intake::db::Database;
use order_intake::gateway::{self, state::AppState};
use order_intake::health::{
    HealthAggregator, PostgresProbe, RedisProbe, UtilizationThresholds,
};
use order_intake::store::OrderStore;

/// Value following the first occurrence of any of `flags`, if present.
fn flag_value(args: &[String], flags: &[&str]) -> Option<String> {
    args.windows(2)
        .find(|pair| flags.contains(&pair[0].as_str()))
        .map(|pair| pair[1].clone())
}

fn config_env(args: &[String]) -> String {
    flag_value(args, &["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

fn port_override(args: &[String]) -> Option<u16> {
    flag_value(args, &["--port"]).and_then(|port| port.parse().ok())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let env = config_env(&args);
    let config = AppConfig::load(&env).context("loading configuration")?;
    let _log_guard = order_intake::logging::init_logging(&config);

    tracing::info!("Starting order-intake service in {} mode", env);

    let mut aggregator =
        HealthAggregator::new(Duration::from_secs(config.health.probe_timeout_secs));

    if let Some(ref url) = config.postgres_url {
        let db = Arc::new(Database::connect(url).context("configuring PostgreSQL pool")?);
        aggregator = aggregator.register(Arc::new(PostgresProbe::new(db)));
    } else {
        tracing::warn!("postgres_url not configured; database probe disabled");
    }

    if let Some(ref url) = config.redis_url {
        let cache = Arc::new(Cache::connect(url).context("configuring Redis client")?);
        aggregator = aggregator.register(Arc::new(RedisProbe::new(cache)));
    } else {
        tracing::warn!("redis_url not configured; cache probe disabled");
    }

    tracing::info!("{} dependency probes registered", aggregator.probe_count());

    let state = Arc::new(AppState::new(
        OrderStore::new(),
        config.customer_id_kind,
        aggregator,
        UtilizationThresholds {
            memory_degraded_percent: config.health.memory_degraded_percent,
            memory_unhealthy_percent: config.health.memory_unhealthy_percent,
        },
    ));

    let port = port_override(&args).unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn env_flag_is_read_in_long_and_short_form() {
        assert_eq!(config_env(&args(&["bin", "--env", "prod"])), "prod");
        assert_eq!(config_env(&args(&["bin", "-e", "staging"])), "staging");
        assert_eq!(config_env(&args(&["bin"])), "dev");
    }

    #[test]
    fn port_override_requires_a_parseable_value() {
        assert_eq!(port_override(&args(&["bin", "--port", "9000"])), Some(9000));
        assert_eq!(port_override(&args(&["bin", "--port", "nine"])), None);
        assert_eq!(port_override(&args(&["bin"])), None);
        // A trailing flag with no value is ignored rather than panicking.
        assert_eq!(port_override(&args(&["bin", "--port"])), None);
    }
}
