//! Redis connection management.

use redis::Client;

/// Redis client for the cache dependency.
///
/// The client only parses the URL up front; connections are established per
/// probe so an unreachable Redis surfaces in the health report rather than
/// preventing startup.
pub struct Cache {
    client: Client,
}

impl Cache {
    pub fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;
        tracing::info!("Redis client configured");
        Ok(Self { client })
    }

    /// Liveness ping used by the health probe.
    pub async fn ping(&self) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
