//! Admin login.
//!
//! There are no user accounts: one shared password grants the admin role.
//! A successful login answers with a signed token the client then presents
//! as a bearer credential.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::services::token::constant_time_compare;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// The shared admin password. Treated as empty when omitted so a blank
    /// body fails the comparison instead of the parse.
    #[serde(default)]
    password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    token: String,
}

/// `POST /api/admin/login`
///
/// Compares the submitted password against the configured admin secret and
/// issues a 12-hour token on success. Any mismatch, including an empty
/// password, is a 401.
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let expected = state.config().admin_password.expose_secret();
    if request.password.is_empty() || !constant_time_compare(&request.password, expected) {
        return Err(AppError::Unauthorized("Invalid password".to_string()));
    }

    let token = state.tokens().issue()?;
    tracing::info!("admin login succeeded");

    Ok(Json(LoginResponse { token }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_password_defaults_to_empty() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(request.password.is_empty());
    }

    #[test]
    fn response_serializes_token_field() {
        let response = LoginResponse {
            token: "abc.def".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token"], "abc.def");
    }
}
