//! Document upload endpoint handler

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use super::state::AppState;
use super::types::{ApiError, UploadResponse};

/// POST /documents
///
/// Accepts a multipart upload with a `file` field. The body must decode as
/// UTF-8 text; ingestion is intentionally text-only and binary uploads are
/// rejected rather than transcoded.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;

        let content = String::from_utf8(bytes.to_vec()).map_err(|_| {
            ApiError::bad_request("File content is not valid UTF-8 text").with_param("file")
        })?;

        if content.trim().is_empty() {
            return Err(ApiError::bad_request("File content is empty").with_param("file"));
        }

        info!(
            filename = filename.as_deref().unwrap_or("<unnamed>"),
            bytes = content.len(),
            "Processing document upload"
        );

        let result = state
            .ingestion_service
            .ingest(&content, filename.as_deref())
            .await?;

        return Ok(Json(UploadResponse {
            message: "File uploaded and processed successfully.".to_string(),
            document_id: result.document_id,
            chunks_created: result.chunks_created,
        }));
    }

    Err(ApiError::bad_request("Missing multipart field 'file'").with_param("file"))
}
