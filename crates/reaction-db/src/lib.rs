//! # reaction-db
//!
//! Storage layer implementing `ReactionStore` on PostgreSQL via SQLx, plus an
//! in-process store for tests and single-node deployments.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Record ↔ model mappers
//! - Store implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reaction_common::DatabaseConfig;
//! use reaction_core::ReactionStore;
//! use reaction_db::PgReactionStore;
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = reaction_db::connect(config).await?;
//!     let store = PgReactionStore::new(pool);
//!     store.ensure_schema().await?;
//!
//!     let records = store.get_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{connect, PgPool};
pub use repositories::{InMemoryReactionStore, PgReactionStore};
