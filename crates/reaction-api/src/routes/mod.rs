//! Route definitions
//!
//! All API routes are mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{activity, health, reaction_data};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/reactiondata", get(reaction_data::get_all_reaction_data))
        .route("/reactions/activity", post(activity::handle_reaction_activity))
}
