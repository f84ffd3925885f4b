//! Reaction record <-> model mapper

use reaction_core::ReactionRecord;

use crate::models::ReactionDataModel;

/// Convert ReactionDataModel to ReactionRecord
impl From<ReactionDataModel> for ReactionRecord {
    fn from(model: ReactionDataModel) -> Self {
        ReactionRecord {
            partition_key: model.partition_key,
            row_key: model.row_key,
            message_id: model.message_id,
            conversation_id: model.conversation_id,
            reactor_directory_id: model.reactor_directory_id,
            reactor_id: model.reactor_id,
            reaction_kind: model.reaction_kind,
        }
    }
}
