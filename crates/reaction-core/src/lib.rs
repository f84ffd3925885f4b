//! # reaction-core
//!
//! Domain layer containing the reaction record, the inbound activity shape,
//! the reaction store trait, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    ChannelAccount, ConversationAccount, MessageReaction, ReactionActivity, ReactionCatalogItem,
    ReactionKey, ReactionRecord,
};
pub use error::DomainError;
pub use traits::{ReactionStore, RepoResult};
