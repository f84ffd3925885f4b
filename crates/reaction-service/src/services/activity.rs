//! Activity dispatch
//!
//! Fans a message-reaction activity out to the translator, one call per
//! reaction the activity carries.

use reaction_core::ReactionActivity;
use tracing::{info, instrument, warn};

use crate::dto::ActivityOutcome;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::reaction::ReactionTranslator;

/// Reaction activity service
pub struct ReactionActivityService<'a> {
    translator: ReactionTranslator<'a>,
}

impl<'a> ReactionActivityService<'a> {
    /// Create a new ReactionActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            translator: ReactionTranslator::new(ctx),
        }
    }

    /// Apply every added reaction, then every removed one
    ///
    /// Stops at the first failure; events already applied stay applied.
    #[instrument(skip(self, activity), fields(reply_to_id = %activity.reply_to_id()))]
    pub async fn handle(&self, activity: &ReactionActivity) -> ServiceResult<ActivityOutcome> {
        let mut outcome = ActivityOutcome::default();

        for reaction in &activity.reactions_added {
            if reaction.kind.trim().is_empty() {
                warn!("Skipping added reaction without a type");
                continue;
            }
            self.translator
                .on_reaction_added(&reaction.kind, Some(activity))
                .await?;
            outcome.added += 1;
        }

        for reaction in &activity.reactions_removed {
            if reaction.kind.trim().is_empty() {
                warn!("Skipping removed reaction without a type");
                continue;
            }
            self.translator
                .on_reaction_removed(&reaction.kind, Some(activity))
                .await?;
            outcome.removed += 1;
        }

        info!(
            added = outcome.added,
            removed = outcome.removed,
            "Reaction activity applied"
        );

        Ok(outcome)
    }
}
