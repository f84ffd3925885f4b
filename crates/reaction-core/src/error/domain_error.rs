//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Reaction not found: {partition_key}/{row_key}")]
    ReactionNotFound {
        partition_key: String,
        row_key: String,
    },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Malformed reaction key: {0} is empty")]
    MalformedKey(&'static str),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Create a "reaction not found" error
    pub fn reaction_not_found(partition_key: impl Into<String>, row_key: impl Into<String>) -> Self {
        Self::ReactionNotFound {
            partition_key: partition_key.into(),
            row_key: row_key.into(),
        }
    }

    /// Create a storage error from any backend failure
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::StorageUnavailable(err.to_string())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReactionNotFound { .. } => "UNKNOWN_REACTION",
            Self::MalformedKey(_) => "MALFORMED_KEY",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReactionNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MalformedKey(_))
    }

    /// Check if the backing store could not be reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}
