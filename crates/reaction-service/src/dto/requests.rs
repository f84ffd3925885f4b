//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use reaction_core::{ChannelAccount, ConversationAccount, MessageReaction, ReactionActivity};
use serde::Deserialize;
use validator::Validate;

/// Upper bound on reactions carried by one activity, per direction
pub const MAX_REACTIONS_PER_ACTIVITY: u64 = 50;

// ============================================================================
// Activity Requests
// ============================================================================

/// Message-reaction activity posted by the bot platform
///
/// Field names follow the platform's camelCase JSON.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReactionActivityRequest {
    #[serde(default)]
    pub reply_to_id: Option<String>,

    #[serde(default)]
    pub from: Option<ChannelAccount>,

    #[serde(default)]
    pub conversation: Option<ConversationAccount>,

    #[serde(default)]
    #[validate(length(max = MAX_REACTIONS_PER_ACTIVITY, message = "Too many reactions added in one activity"))]
    pub reactions_added: Vec<MessageReaction>,

    #[serde(default)]
    #[validate(length(max = MAX_REACTIONS_PER_ACTIVITY, message = "Too many reactions removed in one activity"))]
    pub reactions_removed: Vec<MessageReaction>,
}

impl From<ReactionActivityRequest> for ReactionActivity {
    fn from(req: ReactionActivityRequest) -> Self {
        Self {
            reply_to_id: req.reply_to_id,
            from: req.from,
            conversation: req.conversation,
            reactions_added: req.reactions_added,
            reactions_removed: req.reactions_removed,
        }
    }
}
