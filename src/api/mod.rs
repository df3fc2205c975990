//! API handlers for the REST endpoints

pub mod auth;
pub mod customers;
pub mod health;
pub mod openapi;
pub mod rented_books;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Json body extractor whose rejection goes through the application error
/// envelope as a 400 instead of axum's plain-text 422.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(AppJson(value))
    }
}

/// Extractor for claims out of a syntactically valid bearer token. Does not
/// consult the revocation store; used by logout so that revoking an already
/// revoked token stays idempotent.
pub struct BearerClaims(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for BearerClaims {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        // Validate JWT token using the secret from configuration
        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(BearerClaims(claims))
    }
}

/// Extractor for the authenticated user: a valid, non-revoked bearer token
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let BearerClaims(claims) = BearerClaims::from_request_parts(parts, state).await?;

        // Revocation is enforced regardless of the token's own expiry claim
        if state.services.auth.is_revoked(&claims.jti) {
            return Err(AppError::Authentication(
                "Token has been revoked".to_string(),
            ));
        }

        Ok(AuthenticatedUser(claims))
    }
}

/// Generic message envelope
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
