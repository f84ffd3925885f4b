//! Redis store failures

use reaction_core::DomainError;

/// Failure talking to Redis or decoding what it returned
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("redis pool misconfigured: {0}")]
    Pool(String),

    #[error("no redis connection available: {0}")]
    Checkout(#[from] deadpool_redis::PoolError),

    #[error("redis command failed: {0}")]
    Command(#[from] redis::RedisError),

    #[error("stored reaction is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Decode(e) => DomainError::Serialization(e.to_string()),
            other => DomainError::storage(other),
        }
    }
}
