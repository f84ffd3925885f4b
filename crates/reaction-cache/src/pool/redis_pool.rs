//! deadpool-backed Redis connections for the reaction store

use deadpool_redis::{Config, Connection, Pool, Runtime};
use reaction_common::RedisConfig;

use crate::store::{StoreError, StoreResult};

/// Pooled Redis connections
#[derive(Clone)]
pub struct RedisPool {
    inner: Pool,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.inner.status();
        f.debug_struct("RedisPool")
            .field("size", &status.size)
            .field("max_size", &status.max_size)
            .finish()
    }
}

impl RedisPool {
    /// Build a pool for the configured server
    ///
    /// No connection is opened until the first command.
    pub fn connect(config: &RedisConfig) -> StoreResult<Self> {
        let inner = Config::from_url(&config.url)
            .builder()
            .map_err(|e| StoreError::Pool(e.to_string()))?
            .max_size(config.max_connections as usize)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        tracing::info!(
            server = %redacted(&config.url),
            max_connections = config.max_connections,
            "Redis pool created"
        );

        Ok(Self { inner })
    }

    pub(crate) async fn conn(&self) -> StoreResult<Connection> {
        Ok(self.inner.get().await?)
    }

    /// Round-trip a PING
    pub async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn().await?;
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }
}

/// Host part of a Redis URL, without credentials
fn redacted(url: &str) -> &str {
    url.rsplit_once('@').map_or(url, |(_, host)| host)
}
