//! Upload endpoints: `POST /upload` (page) and `POST /api/upload` (JSON).
//!
//! Both read the `document` field and hand it to the shared submit pipeline.

use axum::{
    Json,
    extract::{Multipart, State},
    response::Html,
};
use serde::Serialize;
use tracing::{debug, info};

use textra_core::{JobId, TextraError, UploadRequest, submit_document};

use crate::error::{ApiError, PageError};
use crate::pages;
use crate::server::GatewayState;

/// Multipart field carrying the document.
pub const DOCUMENT_FIELD: &str = "document";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub job_id: JobId,
}

/// Strip any client-side directory components from a submitted filename.
fn base_name(filename: &str) -> &str {
    filename.rsplit(['/', '\\']).next().unwrap_or(filename)
}

/// Pull the `document` file out of a multipart body.
pub async fn read_document(mut multipart: Multipart) -> Result<UploadRequest, TextraError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| TextraError::InvalidMultipart(e.body_text()))?
    {
        if field.name() != Some(DOCUMENT_FIELD) {
            debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        // A plain form value under the document name is not a file part.
        let Some(filename) = field.file_name().map(|name| base_name(name).to_string()) else {
            return Err(TextraError::MissingFile);
        };
        if filename.is_empty() {
            return Err(TextraError::EmptyFilename);
        }
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| TextraError::InvalidMultipart(e.body_text()))?;

        return Ok(UploadRequest {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }
    Err(TextraError::MissingFile)
}

async fn accept_upload(state: &GatewayState, multipart: Multipart) -> Result<JobId, TextraError> {
    let upload = read_document(multipart).await?;
    info!(filename = %upload.filename, size = upload.bytes.len(), "Received upload");
    submit_document(state.store.as_ref(), state.ocr.as_ref(), upload).await
}

/// Handler for `POST /upload`: renders the polling page for the new job.
pub async fn upload_page(
    State(state): State<GatewayState>,
    multipart: Multipart,
) -> Result<Html<String>, PageError> {
    let job_id = accept_upload(&state, multipart).await?;
    Ok(Html(pages::check_status_page(&job_id, state.wait_policy.interval)))
}

/// Handler for `POST /api/upload`: returns `{"jobId": ...}`.
pub async fn upload_api(
    State(state): State<GatewayState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let job_id = accept_upload(&state, multipart).await?;
    Ok(Json(UploadResponse { job_id }))
}
