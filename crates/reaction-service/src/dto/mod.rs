//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::{ReactionActivityRequest, MAX_REACTIONS_PER_ACTIVITY};
pub use responses::{ActivityOutcome, HealthChecks, HealthResponse, ReadinessResponse};
