//! Error handling utilities for stores

use reaction_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Row decoding failures mean the stored data is bad, everything else
/// means the database could not serve the request.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        SqlxError::ColumnDecode { .. } | SqlxError::Decode(_) | SqlxError::ColumnNotFound(_) => {
            DomainError::Serialization(e.to_string())
        }
        other => DomainError::storage(other),
    }
}
