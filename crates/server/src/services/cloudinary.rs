//! Cloudinary upload API client.
//!
//! Relays a client-supplied base64 data URL to Cloudinary using a
//! server-computed request signature. Single request/response; no retry, no
//! partial-failure recovery.

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::MediaConfig;

/// Cloudinary upload API base URL.
const UPLOAD_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Destination folder used when the request does not name one.
pub const DEFAULT_FOLDER: &str = "portfolio-admin";

/// Errors that can occur when uploading to Cloudinary.
#[derive(Debug, Error)]
pub enum CloudinaryError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Cloudinary returned a non-success response.
    #[error("Cloudinary rejected upload ({status}): {message}")]
    Rejected {
        /// Upstream HTTP status.
        status: u16,
        /// Upstream error message when present.
        message: String,
    },

    /// Failed to parse a success response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Resource type tag accepted by the upload API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Let Cloudinary detect the type from the payload.
    #[default]
    Auto,
    Image,
    Video,
    Raw,
}

impl ResourceType {
    /// The path segment used in the upload URL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Image => "image",
            Self::Video => "video",
            Self::Raw => "raw",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored asset as reported by Cloudinary.
#[derive(Debug, Clone)]
pub struct UploadedAsset {
    /// Canonical HTTPS URL of the stored asset.
    pub url: String,
    /// Cloudinary public identifier.
    pub public_id: String,
    /// Resource type Cloudinary resolved for the payload.
    pub resource_type: String,
}

/// Success response body from the upload API.
#[derive(Debug, Deserialize)]
struct UploadResponseBody {
    secure_url: String,
    public_id: String,
    resource_type: String,
}

/// Error response body from the upload API.
#[derive(Debug, Deserialize)]
struct UploadErrorBody {
    error: Option<UploadErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UploadErrorDetail {
    message: String,
}

/// Cloudinary API client for media uploads.
#[derive(Clone)]
pub struct CloudinaryClient {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: SecretString,
}

impl std::fmt::Debug for CloudinaryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryClient")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

impl CloudinaryClient {
    /// Create a new Cloudinary API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &MediaConfig) -> Result<Self, CloudinaryError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        })
    }

    /// Upload a base64 data URL and return the stored asset.
    ///
    /// # Errors
    ///
    /// Returns [`CloudinaryError::Rejected`] when Cloudinary answers with a
    /// non-success status (surfacing its error message when present), or
    /// [`CloudinaryError::Http`] when the call itself fails.
    pub async fn upload(
        &self,
        file_data_url: &str,
        resource_type: ResourceType,
        folder: &str,
    ) -> Result<UploadedAsset, CloudinaryError> {
        let timestamp = Utc::now().timestamp();
        let signature = sign_upload(folder, timestamp, self.api_secret.expose_secret());

        let url = format!(
            "{UPLOAD_API_BASE}/{}/{}/upload",
            self.cloud_name, resource_type
        );

        let timestamp_str = timestamp.to_string();
        let params = [
            ("file", file_data_url),
            ("folder", folder),
            ("timestamp", timestamp_str.as_str()),
            ("api_key", self.api_key.as_str()),
            ("signature", signature.as_str()),
        ];

        let response = self.client.post(&url).form(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<UploadErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.map(|e| e.message))
                .unwrap_or_else(|| "Cloudinary upload failed".to_string());
            return Err(CloudinaryError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: UploadResponseBody = response
            .json()
            .await
            .map_err(|e| CloudinaryError::Parse(e.to_string()))?;

        Ok(UploadedAsset {
            url: body.secure_url,
            public_id: body.public_id,
            resource_type: body.resource_type,
        })
    }
}

/// Compute the upload request signature.
///
/// Cloudinary signs the sorted non-credential parameters followed by the API
/// secret; with only `folder` and `timestamp` in play the sorted string is
/// fixed. The hex SHA-256 digest is one of the two digest forms the API
/// accepts.
fn sign_upload(folder: &str, timestamp: i64, api_secret: &str) -> String {
    let to_sign = format!("folder={folder}&timestamp={timestamp}{api_secret}");
    hex::encode(Sha256::digest(to_sign.as_bytes()))
}
