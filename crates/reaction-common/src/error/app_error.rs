//! Errors raised outside the domain, by token checks and startup

use reaction_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token does not name a user principal")]
    MissingPrincipal,

    #[error("Could not sign token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status and stable error code
    fn classify(&self) -> (u16, &'static str) {
        match self {
            Self::InvalidToken => (401, "INVALID_TOKEN"),
            Self::TokenExpired => (401, "TOKEN_EXPIRED"),
            Self::MissingPrincipal => (403, "UPN_REQUIRED"),
            Self::TokenSigning(_) => (500, "TOKEN_SIGNING_FAILED"),
            Self::Config(_) => (500, "CONFIG_ERROR"),
            Self::Domain(e) => (domain_status_code(e), e.code()),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.classify().0
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        self.classify().1
    }
}

/// HTTP status for a domain error
#[must_use]
pub fn domain_status_code(err: &DomainError) -> u16 {
    if err.is_validation() {
        400
    } else if err.is_not_found() {
        404
    } else if err.is_unavailable() {
        503
    } else {
        500
    }
}
