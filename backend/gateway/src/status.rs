//! `POST /status`: a single, non-blocking job status check.

use axum::{
    Form, Json,
    extract::State,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use textra_core::{ExtractedLine, JobId, JobStatus, TextraError, map_blocks};

use crate::error::ApiError;
use crate::server::GatewayState;

/// Form body carrying the job to look up.
#[derive(Debug, Default, Deserialize)]
pub struct JobForm {
    #[serde(rename = "jobId", default)]
    pub job_id: Option<String>,
}

impl JobForm {
    /// The job id, or `MissingJobId` when absent or blank.
    pub fn require_job_id(form: Option<Form<JobForm>>) -> Result<JobId, TextraError> {
        form.and_then(|Form(form)| form.job_id)
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .map(JobId::from)
            .ok_or(TextraError::MissingJobId)
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: JobStatus,
    /// Extracted lines, present once the job has succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ExtractedLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Handler for `POST /status`.
pub async fn job_status(
    State(state): State<GatewayState>,
    form: Option<Form<JobForm>>,
) -> Result<Json<StatusResponse>, ApiError> {
    let job_id = JobForm::require_job_id(form)?;
    let snapshot = state.ocr.poll(&job_id).await?;
    debug!(job_id = %job_id, status = %snapshot.status, "Polled job status");

    let data = match snapshot.status {
        JobStatus::Succeeded => Some(map_blocks(&snapshot.blocks)),
        _ => None,
    };
    Ok(Json(StatusResponse {
        status: snapshot.status,
        data,
        message: snapshot.status_message,
    }))
}
