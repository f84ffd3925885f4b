//! Reaction listing handler

use axum::{extract::State, Json};
use reaction_core::ReactionCatalogItem;
use reaction_service::ReactionCatalogService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// List every stored reaction
///
/// GET /api/reactiondata
pub async fn get_all_reaction_data(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ReactionCatalogItem>>> {
    tracing::debug!(upn = %auth.upn, "Listing reaction data");

    let service = ReactionCatalogService::new(state.service_context());
    let items = service.list_all().await?;
    Ok(Json(items))
}
