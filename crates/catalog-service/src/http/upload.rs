//! Accepts a file upload and reports what arrived. Nothing is stored.

use super::ApiError;
use axum::extract::Multipart;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

const FILE_FIELD: &str = "file";
const MISSING: &str = "File is missing";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub file_name: String,
    pub size: usize,
}

/// Reads the first `file` field. Other fields are skipped.
#[instrument(skip(multipart))]
pub async fn upload_file(mut multipart: Multipart) -> Result<Json<UploadReceipt>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        if data.is_empty() {
            break;
        }
        info!(%file_name, size = data.len(), "Upload received");
        return Ok(Json(UploadReceipt {
            file_name,
            size: data.len(),
        }));
    }
    Err(ApiError::BadRequest(MISSING.to_string()))
}
