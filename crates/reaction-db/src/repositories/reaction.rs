//! PostgreSQL implementation of ReactionStore
//!
//! One row per `(partition_key, row_key)`; the primary key makes every
//! point write atomic for its key.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use reaction_core::{DomainError, ReactionKey, ReactionRecord, ReactionStore, RepoResult};

use crate::models::ReactionDataModel;

use super::error::map_db_error;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS reaction_data (
        partition_key        TEXT        NOT NULL,
        row_key              TEXT        NOT NULL,
        message_id           TEXT        NOT NULL,
        conversation_id      TEXT        NOT NULL,
        reactor_directory_id TEXT,
        reactor_id           TEXT        NOT NULL,
        reaction_kind        TEXT        NOT NULL,
        updated_at           TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        PRIMARY KEY (partition_key, row_key)
    )
"#;

// Listing order compares bytes, whatever the database locale
const CREATE_LISTING_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_reaction_data_listing
        ON reaction_data (
            reactor_directory_id COLLATE "C" NULLS FIRST,
            partition_key COLLATE "C",
            row_key COLLATE "C"
        )
"#;

/// PostgreSQL implementation of ReactionStore
#[derive(Clone)]
pub struct PgReactionStore {
    pool: PgPool,
}

impl PgReactionStore {
    /// Create a new PgReactionStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the reaction_data table and its listing index if missing
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> RepoResult<()> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        sqlx::query(CREATE_LISTING_INDEX)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        debug!("reaction_data schema ready");
        Ok(())
    }
}

#[async_trait]
impl ReactionStore for PgReactionStore {
    #[instrument(skip(self))]
    async fn get_all(&self) -> RepoResult<Vec<ReactionRecord>> {
        let results = sqlx::query_as::<_, ReactionDataModel>(
            r#"
            SELECT partition_key, row_key, message_id, conversation_id,
                   reactor_directory_id, reactor_id, reaction_kind, updated_at
            FROM reaction_data
            ORDER BY reactor_directory_id COLLATE "C" ASC NULLS FIRST,
                     partition_key COLLATE "C",
                     row_key COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReactionRecord::from).collect())
    }

    #[instrument(skip(self), fields(key = %key))]
    async fn get(&self, key: &ReactionKey) -> RepoResult<Option<ReactionRecord>> {
        let result = sqlx::query_as::<_, ReactionDataModel>(
            r#"
            SELECT partition_key, row_key, message_id, conversation_id,
                   reactor_directory_id, reactor_id, reaction_kind, updated_at
            FROM reaction_data
            WHERE partition_key = $1 AND row_key = $2
            "#,
        )
        .bind(key.partition_key())
        .bind(key.row_key())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReactionRecord::from))
    }

    #[instrument(skip(self, record), fields(partition_key = %record.partition_key, row_key = %record.row_key))]
    async fn create_or_update(&self, record: &ReactionRecord) -> RepoResult<()> {
        let key = record.key()?;

        sqlx::query(
            r#"
            INSERT INTO reaction_data (
                partition_key, row_key, message_id, conversation_id,
                reactor_directory_id, reactor_id, reaction_kind, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            ON CONFLICT (partition_key, row_key) DO UPDATE SET
                message_id = EXCLUDED.message_id,
                conversation_id = EXCLUDED.conversation_id,
                reactor_directory_id = EXCLUDED.reactor_directory_id,
                reactor_id = EXCLUDED.reactor_id,
                reaction_kind = EXCLUDED.reaction_kind,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(key.partition_key())
        .bind(key.row_key())
        .bind(&record.message_id)
        .bind(&record.conversation_id)
        .bind(record.reactor_directory_id.as_deref())
        .bind(&record.reactor_id)
        .bind(&record.reaction_kind)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, record), fields(partition_key = %record.partition_key, row_key = %record.row_key))]
    async fn delete(&self, record: &ReactionRecord) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM reaction_data WHERE partition_key = $1 AND row_key = $2
            "#,
        )
        .bind(&record.partition_key)
        .bind(&record.row_key)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::reaction_not_found(
                record.partition_key.as_str(),
                record.row_key.as_str(),
            ));
        }

        Ok(())
    }

    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
