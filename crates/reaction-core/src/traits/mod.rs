//! Ports implemented by the infrastructure crates

mod store;

pub use store::{ReactionStore, RepoResult};
