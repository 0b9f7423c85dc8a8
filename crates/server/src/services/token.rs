//! Signed admin tokens.
//!
//! There is a single shared admin identity for the whole system, so a token
//! carries no user data: just a fixed role claim and an expiry. Tokens are
//! the claims JSON, base64url-encoded, followed by a hex HMAC-SHA256 tag
//! computed over the encoded payload. Verification is stateless; there is no
//! revocation list.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

/// How long an issued token stays valid.
pub const TOKEN_TTL_HOURS: i64 = 12;

/// The only role the system issues.
const ADMIN_ROLE: &str = "admin";

/// Errors that can occur when issuing or verifying a token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token is not `payload.signature` or the payload does not decode.
    #[error("malformed token")]
    Malformed,

    /// Signature does not match the payload.
    #[error("invalid token signature")]
    InvalidSignature,

    /// Token is past its expiry.
    #[error("token expired")]
    Expired,

    /// Payload carries a role the system never issues.
    #[error("unexpected role claim")]
    UnexpectedRole,

    /// HMAC key setup failed.
    #[error("invalid signing key")]
    InvalidKey,

    /// Claims serialization failed.
    #[error("claims serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Claims embedded in an admin token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Fixed role claim; always `admin`.
    pub role: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Issues and verifies signed admin tokens.
///
/// Constructed from configuration at startup; the signing secret is never
/// read from ambient state.
#[derive(Clone)]
pub struct TokenService {
    secret: SecretString,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl TokenService {
    /// Create a token service with the given signing secret.
    #[must_use]
    pub const fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Issue a fresh admin token valid for [`TOKEN_TTL_HOURS`].
    ///
    /// # Errors
    ///
    /// Returns `TokenError` if claims serialization or key setup fails.
    pub fn issue(&self) -> Result<String, TokenError> {
        self.issue_at(Utc::now())
    }

    /// Verify a token's signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` if the token is malformed, forged, expired, or
    /// carries an unexpected role.
    pub fn verify(&self, token: &str) -> Result<AdminClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    fn issue_at(&self, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = AdminClaims {
            role: ADMIN_ROLE.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
        let signature = self.sign(&payload)?;

        Ok(format!("{payload}.{signature}"))
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<AdminClaims, TokenError> {
        let (payload, signature) = token.split_once('.').ok_or(TokenError::Malformed)?;

        // Check the signature before touching the payload
        let expected = self.sign(payload)?;
        if !constant_time_compare(&expected, signature) {
            return Err(TokenError::InvalidSignature);
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let claims: AdminClaims =
            serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)?;

        if claims.role != ADMIN_ROLE {
            return Err(TokenError::UnexpectedRole);
        }
        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Compute the hex HMAC-SHA256 tag over an encoded payload.
    fn sign(&self, payload: &str) -> Result<String, TokenError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|_| TokenError::InvalidKey)?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// Compare two strings in constant time to prevent timing attacks.
///
/// Also used by the login handler for the password comparison.
pub(crate) fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}
