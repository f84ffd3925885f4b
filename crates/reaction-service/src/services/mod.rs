//! Business logic services
//!
//! Services borrow a `ServiceContext` and talk to storage only through the
//! `ReactionStore` it carries.

pub mod activity;
pub mod catalog;
pub mod context;
pub mod error;
pub mod reaction;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use activity::ReactionActivityService;
pub use catalog::ReactionCatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionTranslator;
