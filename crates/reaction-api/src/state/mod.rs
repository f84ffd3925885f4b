//! Shared handler state

use std::sync::Arc;

use reaction_common::{AppConfig, JwtService};
use reaction_service::ServiceContext;

/// Cloned into every handler; all fields are shared
#[derive(Debug, Clone)]
pub struct AppState {
    services: ServiceContext,
    config: Arc<AppConfig>,
    jwt: Arc<JwtService>,
}

impl AppState {
    /// The token verifier is keyed from `config.jwt`
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry);
        Self {
            services,
            config: Arc::new(config),
            jwt: Arc::new(jwt),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt
    }
}
