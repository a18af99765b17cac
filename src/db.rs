//! PostgreSQL connection management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

/// PostgreSQL connection pool for the relational store.
///
/// The pool is created lazily so that an unreachable database surfaces in
/// the health probe rather than preventing startup.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Build the connection pool. Fails only on an invalid URL; no network
    /// round-trip happens here.
    pub fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(database_url)?;

        tracing::info!("PostgreSQL connection pool configured");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Minimal round-trip used by the health probe.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
