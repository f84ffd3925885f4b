//! Reaction store trait (port) - the partitioned key-value contract
//!
//! The service layer depends only on this trait. Backends live in
//! `reaction-db` (PostgreSQL, in-process) and `reaction-cache` (Redis).

use async_trait::async_trait;

use crate::entities::{ReactionKey, ReactionRecord};
use crate::error::DomainError;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// Snapshot of every record, ordered by `ReactionRecord::cmp_listing_order`
    async fn get_all(&self) -> RepoResult<Vec<ReactionRecord>>;

    /// Point lookup; `None` when no record exists for the key
    async fn get(&self, key: &ReactionKey) -> RepoResult<Option<ReactionRecord>>;

    /// Insert the record or overwrite every field of the one stored under its key
    async fn create_or_update(&self, record: &ReactionRecord) -> RepoResult<()>;

    /// Remove the record stored under the record's key
    ///
    /// Fails with `DomainError::ReactionNotFound` when nothing is stored there.
    async fn delete(&self, record: &ReactionRecord) -> RepoResult<()>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
