//! Redis-backed reaction store

mod error;
mod reaction;

pub use error::{StoreError, StoreResult};
pub use reaction::{RedisReactionStore, PARTITION_INDEX_KEY, PARTITION_KEY_PREFIX};
