//! # reaction-service
//!
//! Application layer: turns reaction activities into store writes and serves
//! the reaction listing.

pub mod dto;
pub mod services;

pub use dto::{
    ActivityOutcome, HealthResponse, ReactionActivityRequest, ReadinessResponse,
};
pub use services::{
    ReactionActivityService, ReactionCatalogService, ReactionTranslator, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
