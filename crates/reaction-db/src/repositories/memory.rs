//! In-process implementation of ReactionStore
//!
//! Backed by a `DashMap`; each key's entry is guarded by its shard lock, so
//! point writes are atomic per key. Contents are lost when the process exits.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::instrument;

use reaction_core::{DomainError, ReactionKey, ReactionRecord, ReactionStore, RepoResult};

/// In-process reaction store
#[derive(Debug, Default)]
pub struct InMemoryReactionStore {
    records: DashMap<ReactionKey, ReactionRecord>,
}

impl InMemoryReactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ReactionStore for InMemoryReactionStore {
    #[instrument(skip(self))]
    async fn get_all(&self) -> RepoResult<Vec<ReactionRecord>> {
        let mut records: Vec<ReactionRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(ReactionRecord::cmp_listing_order);
        Ok(records)
    }

    #[instrument(skip(self), fields(key = %key))]
    async fn get(&self, key: &ReactionKey) -> RepoResult<Option<ReactionRecord>> {
        Ok(self.records.get(key).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self, record), fields(partition_key = %record.partition_key, row_key = %record.row_key))]
    async fn create_or_update(&self, record: &ReactionRecord) -> RepoResult<()> {
        self.records.insert(record.key()?, record.clone());
        Ok(())
    }

    #[instrument(skip(self, record), fields(partition_key = %record.partition_key, row_key = %record.row_key))]
    async fn delete(&self, record: &ReactionRecord) -> RepoResult<()> {
        let not_found = || {
            DomainError::reaction_not_found(record.partition_key.as_str(), record.row_key.as_str())
        };
        // A blank key can never have been stored
        let key = record.key().map_err(|_| not_found())?;

        self.records.remove(&key).map(|_| ()).ok_or_else(not_found)
    }
}
