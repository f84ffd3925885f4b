//! Reaction API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p reaction-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use anyhow::Context;
use reaction_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first so the log format can follow APP_ENV
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        backend = ?config.store.backend,
        "Starting Reaction API Server"
    );

    reaction_api::run(config).await.context("Server failed")
}
