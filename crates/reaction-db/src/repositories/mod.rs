//! Reaction store implementations
//!
//! Implementations of the `ReactionStore` trait defined in reaction-core.

mod error;
mod memory;
mod reaction;

pub use memory::InMemoryReactionStore;
pub use reaction::PgReactionStore;
