//! # reaction-cache
//!
//! Redis backend for the reaction store.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Reaction Store**: One Redis hash per message partition, indexed by a set
//!
//! ## Example
//!
//! ```ignore
//! use reaction_cache::{RedisPool, RedisReactionStore};
//!
//! let pool = RedisPool::connect(&redis_config)?;
//! let store = RedisReactionStore::new(pool);
//!
//! store.create_or_update(&record).await?;
//! let all = store.get_all().await?;
//! ```

pub mod pool;
pub mod store;

pub use pool::RedisPool;

pub use store::{
    RedisReactionStore, StoreError, StoreResult, PARTITION_INDEX_KEY, PARTITION_KEY_PREFIX,
};
