//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.
//! A token is only accepted when it names the caller's UPN.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Token subject
    pub subject: String,
    /// User principal name
    pub upn: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state.jwt_service().verify(bearer.token()).map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            ApiError::App(e)
        })?;

        let upn = claims.principal().map_err(|e| {
            tracing::warn!(subject = %claims.sub, "Token carries no UPN");
            ApiError::App(e)
        })?;

        Ok(AuthUser {
            upn: upn.to_owned(),
            subject: claims.sub.clone(),
        })
    }
}
