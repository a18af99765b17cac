//! Order-intake service.
//!
//! Validates and accepts order submissions over HTTP and reports
//! consolidated dependency health.
//!
//! # Modules
//!
//! - [`models`] - Order data model and customer id conventions
//! - [`store`] - In-memory order registry
//! - [`health`] - Dependency probes, fan-out aggregation, utilization variant
//! - [`gateway`] - Axum router, handlers, wire types
//! - [`db`] / [`cache`] - PostgreSQL and Redis dependency handles
//! - [`config`] / [`logging`] - YAML configuration and tracing setup

pub mod cache;
pub mod config;
pub mod db;
pub mod gateway;
pub mod health;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use health::{
    DependencyProbe, DependencyProbeResult, DependencyStatus, HealthAggregator, HealthReport,
    OverallStatus, UtilizationReport, UtilizationStatus, UtilizationThresholds,
};
pub use models::{CanonicalOrder, CustomerId, CustomerIdKind, Order, OrderStatus};
pub use store::OrderStore;
