//! Domain entities - core business objects

mod activity;
mod reaction;

pub use activity::{ChannelAccount, ConversationAccount, MessageReaction, ReactionActivity};
pub use reaction::{ReactionCatalogItem, ReactionKey, ReactionRecord};
