//! JWT claims extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tasklane_core::TasklaneError;
use tasklane_security::Claims;

/// Extractor for authenticated user claims.
///
/// The auth middleware validates the bearer token and stores the claims in
/// the request extensions; this extractor surfaces them to the handler and
/// rejects the request with 401 when they are absent.
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    /// Returns the authenticated email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.0.email()
    }
}

impl std::ops::Deref for AuthenticatedUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AppError(TasklaneError::unauthorized("Missing authorization header"))
            })?;

        if !auth_header.starts_with("Bearer ") {
            return Err(AppError(TasklaneError::unauthorized(
                "Invalid authorization format",
            )));
        }

        // Claims present in extensions means the middleware accepted the token.
        let claims = parts.extensions.get::<Claims>().cloned().ok_or_else(|| {
            AppError(TasklaneError::unauthorized("Invalid or expired token"))
        })?;

        Ok(AuthenticatedUser(claims))
    }
}
