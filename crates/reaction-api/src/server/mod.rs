//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reaction_cache::{RedisPool, RedisReactionStore};
use reaction_common::{AppConfig, AppError, ConfigError, StoreBackend};
use reaction_core::{DomainError, ReactionStore};
use reaction_db::{InMemoryReactionStore, PgReactionStore};
use reaction_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes skip rate limiting.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Connect the configured reaction store
pub async fn create_store(config: &AppConfig) -> Result<Arc<dyn ReactionStore>, AppError> {
    match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory reaction store");
            Ok(Arc::new(InMemoryReactionStore::new()))
        }
        StoreBackend::Postgres => {
            let db = config
                .store
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config(ConfigError::MissingVar("DATABASE_URL").to_string()))?;

            info!("Connecting to PostgreSQL...");
            let pool = reaction_db::connect(db).await?;
            let store = PgReactionStore::new(pool);
            store.ensure_schema().await?;
            info!("PostgreSQL connection established");

            Ok(Arc::new(store))
        }
        StoreBackend::Redis => {
            let redis = config
                .store
                .redis
                .as_ref()
                .ok_or_else(|| AppError::Config(ConfigError::MissingVar("REDIS_URL").to_string()))?;

            info!("Connecting to Redis...");
            let pool = RedisPool::connect(redis).map_err(DomainError::from)?;
            let store = RedisReactionStore::new(pool);
            store.health_check().await?;
            info!("Redis connection established");

            Ok(Arc::new(store))
        }
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let store = create_store(&config).await?;

    let service_context = ServiceContextBuilder::new().store(store).build()?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
