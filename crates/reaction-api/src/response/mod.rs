//! Error responses
//!
//! Every failure is rendered as `{"error": {"code", "message", "details"?}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reaction_common::AppError;
use reaction_service::ServiceError;
use serde_json::json;
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing authorization header")]
    MissingAuth,
}

impl ApiError {
    fn classify(&self) -> (StatusCode, &'static str) {
        let (status, code) = match self {
            Self::App(e) => (e.status_code(), e.error_code()),
            Self::Service(e) => (e.status_code(), e.error_code()),
            Self::Validation(_) => (400, "VALIDATION_ERROR"),
            Self::InvalidBody(_) => (400, "INVALID_BODY"),
            Self::MissingAuth => (401, "MISSING_AUTHORIZATION"),
        };
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            code,
        )
    }

    pub fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    pub fn error_code(&self) -> &'static str {
        self.classify().1
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();
        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        }

        let mut error = json!({ "code": code, "message": self.to_string() });
        if let Self::Validation(errors) = &self {
            error["details"] = serde_json::to_value(errors).unwrap_or_default();
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
