//! Authentication extractor for admin routes.
//!
//! The admin surface is a bearer-token API: every protected handler takes
//! [`RequireAdmin`], which checks the `Authorization` header against the
//! token service. There is one shared admin identity, so the extractor
//! yields claims, not a user.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::error::AppError;
use crate::services::token::AdminClaims;
use crate::state::AppState;

/// Extractor that requires a valid admin token.
///
/// Missing, malformed, forged, or expired tokens are all rejected with
/// 401 and an `{"error": "Unauthorized"}` body.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(claims): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("admin since {}", claims.iat)
/// }
/// ```
pub struct RequireAdmin(pub AdminClaims);

impl<S> FromRequestParts<S> for RequireAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let token = bearer_token(parts)
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

        let claims = state.tokens().verify(token)?;

        Ok(Self(claims))
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
