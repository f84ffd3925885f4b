//! Inbound message-reaction activity as delivered by the bot platform
//!
//! Every field the platform may omit is optional here. Missing values are
//! read as empty strings and rejected later by `ReactionKey::new`.

use serde::{Deserialize, Serialize};

/// A user or bot account on the channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAccount {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Directory object id assigned by the identity provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aad_object_id: Option<String>,
}

/// The conversation an activity belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAccount {
    #[serde(default)]
    pub id: String,
}

/// A single reaction entry, e.g. `{ "type": "like" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReaction {
    #[serde(rename = "type")]
    pub kind: String,
}

impl MessageReaction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// Message-reaction activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionActivity {
    /// Id of the message the reaction targets
    #[serde(default)]
    pub reply_to_id: Option<String>,
    #[serde(default)]
    pub from: Option<ChannelAccount>,
    #[serde(default)]
    pub conversation: Option<ConversationAccount>,
    #[serde(default)]
    pub reactions_added: Vec<MessageReaction>,
    #[serde(default)]
    pub reactions_removed: Vec<MessageReaction>,
}

impl ReactionActivity {
    /// Build an activity addressed at `reply_to_id` from the given reactor
    pub fn new(
        reply_to_id: impl Into<String>,
        from: ChannelAccount,
        conversation_id: impl Into<String>,
    ) -> Self {
        Self {
            reply_to_id: Some(reply_to_id.into()),
            from: Some(from),
            conversation: Some(ConversationAccount {
                id: conversation_id.into(),
            }),
            reactions_added: Vec::new(),
            reactions_removed: Vec::new(),
        }
    }

    #[inline]
    pub fn reply_to_id(&self) -> &str {
        self.reply_to_id.as_deref().unwrap_or_default()
    }

    #[inline]
    pub fn from_id(&self) -> &str {
        self.from.as_ref().map_or("", |from| from.id.as_str())
    }

    #[inline]
    pub fn from_aad_object_id(&self) -> Option<&str> {
        self.from.as_ref().and_then(|from| from.aad_object_id.as_deref())
    }

    #[inline]
    pub fn conversation_id(&self) -> &str {
        self.conversation.as_ref().map_or("", |c| c.id.as_str())
    }
}

impl ChannelAccount {
    pub fn new(id: impl Into<String>, aad_object_id: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            aad_object_id,
        }
    }
}
