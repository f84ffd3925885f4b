//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the level comes from the deployment environment.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Subscriber settings for one deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub level: Level,
    /// One JSON object per line, for log shippers
    pub json: bool,
    /// Log span open/close, which is noisy outside development
    pub span_events: bool,
}

impl TracingConfig {
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: Level::DEBUG,
                json: false,
                span_events: true,
            },
            Environment::Staging => Self {
                level: Level::INFO,
                json: false,
                span_events: false,
            },
            Environment::Production => Self {
                level: Level::INFO,
                json: true,
                span_events: false,
            },
        }
    }
}

/// Install the global subscriber
///
/// # Errors
/// Returns `TracingError::AlreadyInitialized` if a subscriber is already set
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
    let spans = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let layer = fmt::layer().with_span_events(spans);
    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer).try_init()
    };
    result.map_err(|_| TracingError::AlreadyInitialized)
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
