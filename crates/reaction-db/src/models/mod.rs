//! Database models

mod reaction;

pub use reaction::ReactionDataModel;
