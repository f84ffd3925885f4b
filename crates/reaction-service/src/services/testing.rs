//! Store doubles for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reaction_core::{DomainError, ReactionKey, ReactionRecord, ReactionStore, RepoResult};
use reaction_db::InMemoryReactionStore;

/// In-memory store that counts calls and remembers deleted records
#[derive(Default)]
pub struct RecordingStore {
    inner: InMemoryReactionStore,
    calls: AtomicUsize,
    deleted: Mutex<Vec<ReactionRecord>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store calls made so far, excluding `get_all`
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn deleted(&self) -> Vec<ReactionRecord> {
        self.deleted.lock().unwrap().clone()
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReactionStore for RecordingStore {
    async fn get_all(&self) -> RepoResult<Vec<ReactionRecord>> {
        self.inner.get_all().await
    }

    async fn get(&self, key: &ReactionKey) -> RepoResult<Option<ReactionRecord>> {
        self.tick();
        self.inner.get(key).await
    }

    async fn create_or_update(&self, record: &ReactionRecord) -> RepoResult<()> {
        self.tick();
        self.inner.create_or_update(record).await
    }

    async fn delete(&self, record: &ReactionRecord) -> RepoResult<()> {
        self.tick();
        self.inner.delete(record).await?;
        self.deleted.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Store whose every call fails as unreachable
pub struct FailingStore;

#[async_trait]
impl ReactionStore for FailingStore {
    async fn get_all(&self) -> RepoResult<Vec<ReactionRecord>> {
        Err(DomainError::storage("connection refused"))
    }

    async fn get(&self, _key: &ReactionKey) -> RepoResult<Option<ReactionRecord>> {
        Err(DomainError::storage("connection refused"))
    }

    async fn create_or_update(&self, _record: &ReactionRecord) -> RepoResult<()> {
        Err(DomainError::storage("connection refused"))
    }

    async fn delete(&self, _record: &ReactionRecord) -> RepoResult<()> {
        Err(DomainError::storage("connection refused"))
    }

    async fn health_check(&self) -> RepoResult<()> {
        Err(DomainError::storage("connection refused"))
    }
}
