//! Redis implementation of ReactionStore
//!
//! Layout:
//! - `reaction:p:{partition_key}` is a hash mapping `row_key` to the JSON record
//! - `reaction:index` is a set of every partition holding at least one record
//!
//! Writes touch both keys atomically (MULTI/EXEC for upserts, a Lua script for
//! deletes) so the index never drops a live partition.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::instrument;

use reaction_core::{DomainError, ReactionKey, ReactionRecord, ReactionStore, RepoResult};

use super::error::StoreResult;
use crate::pool::RedisPool;

/// Prefix of the per-partition hash keys
pub const PARTITION_KEY_PREFIX: &str = "reaction:p:";

/// Set of partitions that currently hold records
pub const PARTITION_INDEX_KEY: &str = "reaction:index";

// KEYS[1] = partition hash, KEYS[2] = partition index
// ARGV[1] = row key, ARGV[2] = partition key
const DELETE_SCRIPT: &str = r"
local removed = redis.call('HDEL', KEYS[1], ARGV[1])
if removed == 1 and redis.call('HLEN', KEYS[1]) == 0 then
    redis.call('SREM', KEYS[2], ARGV[2])
end
return removed
";

/// Build the hash key for a partition
fn partition_key(partition: &str) -> String {
    format!("{PARTITION_KEY_PREFIX}{partition}")
}

/// Redis implementation of ReactionStore
#[derive(Clone)]
pub struct RedisReactionStore {
    pool: RedisPool,
    delete_script: redis::Script,
}

impl RedisReactionStore {
    /// Create a new RedisReactionStore
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            delete_script: redis::Script::new(DELETE_SCRIPT),
        }
    }

    async fn read_all(&self) -> StoreResult<Vec<ReactionRecord>> {
        let mut conn = self.pool.conn().await?;
        let partitions: Vec<String> = conn.smembers(PARTITION_INDEX_KEY).await?;

        let mut records = Vec::new();
        for partition in partitions {
            let values: Vec<String> = conn.hvals(partition_key(&partition)).await?;
            for value in values {
                records.push(serde_json::from_str::<ReactionRecord>(&value)?);
            }
        }

        records.sort_by(ReactionRecord::cmp_listing_order);
        Ok(records)
    }

    async fn read_one(&self, key: &ReactionKey) -> StoreResult<Option<ReactionRecord>> {
        let mut conn = self.pool.conn().await?;
        let value: Option<String> = conn
            .hget(partition_key(key.partition_key()), key.row_key())
            .await?;

        value
            .map(|v| serde_json::from_str(&v))
            .transpose()
            .map_err(Into::into)
    }

    async fn write(&self, key: &ReactionKey, record: &ReactionRecord) -> StoreResult<()> {
        let serialized = serde_json::to_string(record)?;
        let mut conn = self.pool.conn().await?;

        redis::pipe()
            .atomic()
            .hset(partition_key(key.partition_key()), key.row_key(), serialized)
            .ignore()
            .sadd(PARTITION_INDEX_KEY, key.partition_key())
            .ignore()
            .query_async::<()>(&mut conn)
            .await?;

        Ok(())
    }

    async fn remove(&self, partition: &str, row: &str) -> StoreResult<bool> {
        let mut conn = self.pool.conn().await?;
        let removed: i64 = self
            .delete_script
            .key(partition_key(partition))
            .key(PARTITION_INDEX_KEY)
            .arg(row)
            .arg(partition)
            .invoke_async(&mut conn)
            .await?;

        Ok(removed > 0)
    }
}

#[async_trait]
impl ReactionStore for RedisReactionStore {
    #[instrument(skip(self))]
    async fn get_all(&self) -> RepoResult<Vec<ReactionRecord>> {
        Ok(self.read_all().await?)
    }

    #[instrument(skip(self), fields(key = %key))]
    async fn get(&self, key: &ReactionKey) -> RepoResult<Option<ReactionRecord>> {
        Ok(self.read_one(key).await?)
    }

    #[instrument(skip(self, record), fields(partition_key = %record.partition_key, row_key = %record.row_key))]
    async fn create_or_update(&self, record: &ReactionRecord) -> RepoResult<()> {
        let key = record.key()?;
        Ok(self.write(&key, record).await?)
    }

    #[instrument(skip(self, record), fields(partition_key = %record.partition_key, row_key = %record.row_key))]
    async fn delete(&self, record: &ReactionRecord) -> RepoResult<()> {
        if self.remove(&record.partition_key, &record.row_key).await? {
            Ok(())
        } else {
            Err(DomainError::reaction_not_found(
                record.partition_key.as_str(),
                record.row_key.as_str(),
            ))
        }
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(self.pool.ping().await?)
    }
}
