//! Reaction activity handler
//!
//! Receives message-reaction activities from the bot platform.

use axum::{extract::State, Json};
use reaction_core::ReactionActivity;
use reaction_service::{ActivityOutcome, ReactionActivityRequest, ReactionActivityService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Apply the reactions added and removed by one activity
///
/// POST /api/reactions/activity
pub async fn handle_reaction_activity(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ReactionActivityRequest>,
) -> ApiResult<Json<ActivityOutcome>> {
    let activity = ReactionActivity::from(req);
    let service = ReactionActivityService::new(state.service_context());
    let outcome = service.handle(&activity).await?;
    Ok(Json(outcome))
}
