//! Media upload relay.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::services::cloudinary::{DEFAULT_FOLDER, ResourceType};
use crate::state::AppState;

/// Upload request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Base64 data URL of the file to store.
    #[serde(default)]
    file_data_url: String,
    /// Resource type tag; anything outside the allowed set is a 400.
    #[serde(default)]
    resource_type: ResourceType,
    /// Destination folder on the media host.
    #[serde(default = "default_folder")]
    folder: String,
}

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

/// Upload response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    url: String,
    public_id: String,
    resource_type: String,
}

/// `POST /api/admin/upload`
///
/// Relays the payload to Cloudinary with a server-computed signature and
/// answers with the stored asset's URL, identifier, and resolved resource
/// type. 500 when the Cloudinary credentials are absent; upstream
/// rejections come back as 400 with the upstream message.
pub async fn upload(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    payload: std::result::Result<Json<UploadRequest>, JsonRejection>,
) -> Result<Json<UploadResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if request.file_data_url.is_empty() {
        return Err(AppError::BadRequest("fileDataUrl is required".to_string()));
    }

    let media = state.media().ok_or_else(|| {
        AppError::Misconfigured("Cloudinary credentials are not configured".to_string())
    })?;

    let asset = media
        .upload(&request.file_data_url, request.resource_type, &request.folder)
        .await?;

    tracing::info!(
        public_id = %asset.public_id,
        resource_type = %asset.resource_type,
        "media upload relayed"
    );

    Ok(Json(UploadResponse {
        url: asset.url,
        public_id: asset.public_id,
        resource_type: asset.resource_type,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_resource_type_and_folder() {
        let request: UploadRequest =
            serde_json::from_str(r#"{"fileDataUrl": "data:image/png;base64,aGk="}"#).unwrap();

        assert_eq!(request.resource_type, ResourceType::Auto);
        assert_eq!(request.folder, DEFAULT_FOLDER);
    }

    #[test]
    fn unknown_resource_type_is_rejected() {
        let result: std::result::Result<UploadRequest, _> = serde_json::from_str(
            r#"{"fileDataUrl": "data:image/png;base64,aGk=", "resourceType": "document"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn response_uses_camel_case_keys() {
        let response = UploadResponse {
            url: "https://res.cloudinary.com/demo/image/upload/a.png".to_string(),
            public_id: "portfolio-admin/a".to_string(),
            resource_type: "image".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("publicId").is_some());
        assert!(json.get("resourceType").is_some());
    }
}
