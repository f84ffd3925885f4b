//! Reaction translator
//!
//! Turns message-reaction events into store writes. One record is kept per
//! (message, reactor) pair; a later reaction from the same reactor on the
//! same message replaces the earlier one.

use reaction_core::{ReactionActivity, ReactionKey, ReactionRecord};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction translator
pub struct ReactionTranslator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionTranslator<'a> {
    /// Create a new ReactionTranslator
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the record an activity describes
    ///
    /// Returns `Ok(None)` when there is no activity.
    ///
    /// # Errors
    /// Returns `DomainError::MalformedKey` if the activity has no reply-to id
    /// or no sender id
    pub fn derive_record(
        reaction_kind: &str,
        activity: Option<&ReactionActivity>,
    ) -> ServiceResult<Option<ReactionRecord>> {
        let Some(activity) = activity else {
            return Ok(None);
        };

        let key = ReactionKey::new(activity.reply_to_id(), activity.from_id())?;
        Ok(Some(ReactionRecord::new(
            &key,
            activity.conversation_id(),
            activity.from_aad_object_id().map(str::to_owned),
            reaction_kind,
        )))
    }

    /// Record a reaction, replacing any earlier one by the same reactor
    #[instrument(skip(self, activity), fields(kind = %reaction_kind))]
    pub async fn on_reaction_added(
        &self,
        reaction_kind: &str,
        activity: Option<&ReactionActivity>,
    ) -> ServiceResult<()> {
        let Some(record) = Self::derive_record(reaction_kind, activity)? else {
            debug!("No activity; nothing to record");
            return Ok(());
        };

        self.ctx.store().create_or_update(&record).await?;

        info!(
            message_id = %record.message_id,
            reactor_id = %record.reactor_id,
            "Reaction recorded"
        );

        Ok(())
    }

    /// Forget the reactor's reaction on a message, if one is stored
    ///
    /// The stored record is deleted, whatever kind it carries.
    #[instrument(skip(self, activity), fields(kind = %reaction_kind))]
    pub async fn on_reaction_removed(
        &self,
        reaction_kind: &str,
        activity: Option<&ReactionActivity>,
    ) -> ServiceResult<()> {
        let Some(record) = Self::derive_record(reaction_kind, activity)? else {
            debug!("No activity; nothing to remove");
            return Ok(());
        };

        let key = record.key()?;
        let Some(found) = self.ctx.store().get(&key).await? else {
            debug!(key = %key, "No stored reaction to remove");
            return Ok(());
        };

        self.ctx.store().delete(&found).await?;

        info!(
            message_id = %found.message_id,
            reactor_id = %found.reactor_id,
            "Reaction removed"
        );

        Ok(())
    }
}
