//! Reaction catalog
//!
//! Read side of the reaction store, shaped for the listing endpoint.

use reaction_core::ReactionCatalogItem;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction catalog service
pub struct ReactionCatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionCatalogService<'a> {
    /// Create a new ReactionCatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every stored reaction in store order
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<ReactionCatalogItem>> {
        let records = self.ctx.store().get_all().await?;
        Ok(records.into_iter().map(ReactionCatalogItem::from).collect())
    }
}
