//! Service context - dependency container for services
//!
//! Holds the reaction store handle every service talks to.

use std::sync::Arc;

use reaction_core::ReactionStore;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn ReactionStore>,
}

impl ServiceContext {
    /// Create a new service context around a store
    pub fn new(store: Arc<dyn ReactionStore>) -> Self {
        Self { store }
    }

    /// Get the reaction store
    pub fn store(&self) -> &dyn ReactionStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &"dyn ReactionStore")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    store: Option<Arc<dyn ReactionStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn ReactionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::MissingDependency` if no store was given
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let store = self.store.ok_or(ServiceError::MissingDependency("store"))?;
        Ok(ServiceContext::new(store))
    }
}
