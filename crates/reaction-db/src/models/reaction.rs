//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the reaction_data table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionDataModel {
    pub partition_key: String,
    pub row_key: String,
    pub message_id: String,
    pub conversation_id: String,
    pub reactor_directory_id: Option<String>,
    pub reactor_id: String,
    pub reaction_kind: String,
    /// Set by the database on every write
    pub updated_at: DateTime<Utc>,
}
