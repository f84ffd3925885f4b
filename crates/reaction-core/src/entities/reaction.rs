//! Reaction record - current reaction state for one (message, reactor) pair

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Two-part composite key addressing a reaction record
///
/// The partition is the message being reacted to, the row is the reacting user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReactionKey {
    partition_key: String,
    row_key: String,
}

impl ReactionKey {
    /// Create a key, rejecting empty or blank segments
    ///
    /// # Errors
    /// Returns `DomainError::MalformedKey` naming the first empty segment
    pub fn new(
        partition_key: impl Into<String>,
        row_key: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let partition_key = partition_key.into();
        let row_key = row_key.into();

        if partition_key.trim().is_empty() {
            return Err(DomainError::MalformedKey("partition_key"));
        }
        if row_key.trim().is_empty() {
            return Err(DomainError::MalformedKey("row_key"));
        }

        Ok(Self {
            partition_key,
            row_key,
        })
    }

    #[inline]
    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    #[inline]
    pub fn row_key(&self) -> &str {
        &self.row_key
    }
}

impl fmt::Display for ReactionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.partition_key, self.row_key)
    }
}

/// Reaction record
///
/// At most one record exists per `(partition_key, row_key)`. A later reaction
/// by the same user on the same message replaces the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRecord {
    /// Id of the message being reacted to
    pub partition_key: String,
    /// Platform id of the reacting user
    pub row_key: String,
    /// Same value as `partition_key`
    pub message_id: String,
    pub conversation_id: String,
    /// Directory object id of the reacting user, if the platform supplied one
    pub reactor_directory_id: Option<String>,
    /// Same value as `row_key`
    pub reactor_id: String,
    pub reaction_kind: String,
}

impl ReactionRecord {
    /// Create a new record for a key
    pub fn new(
        key: &ReactionKey,
        conversation_id: impl Into<String>,
        reactor_directory_id: Option<String>,
        reaction_kind: impl Into<String>,
    ) -> Self {
        Self {
            partition_key: key.partition_key().to_owned(),
            row_key: key.row_key().to_owned(),
            message_id: key.partition_key().to_owned(),
            conversation_id: conversation_id.into(),
            reactor_directory_id,
            reactor_id: key.row_key().to_owned(),
            reaction_kind: reaction_kind.into(),
        }
    }

    /// Composite key of this record
    ///
    /// # Errors
    /// Returns `DomainError::MalformedKey` if a key segment is empty
    pub fn key(&self) -> Result<ReactionKey, DomainError> {
        ReactionKey::new(self.partition_key.as_str(), self.row_key.as_str())
    }

    /// Ordering used by `ReactionStore::get_all`
    ///
    /// Alphabetical by directory id, records without one first, then by key.
    pub fn cmp_listing_order(&self, other: &Self) -> Ordering {
        self.reactor_directory_id
            .cmp(&other.reactor_directory_id)
            .then_with(|| self.partition_key.cmp(&other.partition_key))
            .then_with(|| self.row_key.cmp(&other.row_key))
    }
}

/// Catalog entry returned by the listing endpoint
///
/// `name` carries the reactor's directory object id, not a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCatalogItem {
    pub id: String,
    pub name: Option<String>,
}

impl From<ReactionRecord> for ReactionCatalogItem {
    fn from(record: ReactionRecord) -> Self {
        Self {
            id: record.message_id,
            name: record.reactor_directory_id,
        }
    }
}
