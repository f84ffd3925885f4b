//! Service layer errors

use reaction_common::{domain_status_code, AppError};
use reaction_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Store or key failure, reported with the domain's own code
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The context was built without a collaborator it needs
    #[error("Service context is missing its {0}")]
    MissingDependency(&'static str),
}

impl ServiceError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status_code(e),
            Self::MissingDependency(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::MissingDependency(_) => "MISSING_DEPENDENCY",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            missing @ ServiceError::MissingDependency(_) => AppError::Config(missing.to_string()),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
