//! Axum route handlers for resume upload.

use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::extract_text;

/// Upload limit for `POST /api/resume/extract`.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub characters: usize,
}

/// POST /api/resume/extract
///
/// Expects a multipart form with the PDF in a `file` field.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            file = Some(bytes);
            break;
        }
    }

    let bytes = file.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    info!("Extracting resume text from {} byte upload", bytes.len());

    let text = tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    Ok(Json(ExtractResponse {
        characters: text.chars().count(),
        text,
    }))
}
