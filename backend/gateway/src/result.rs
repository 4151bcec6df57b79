//! `/result`: waits for a job to finish and renders the extracted lines.
//!
//! The browser flow only posts here after `/status` has reported a terminal
//! state, so the wait normally ends after one poll.

use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Response},
};

use textra_core::{JobStatus, map_blocks, wait_for_terminal};

use crate::error::PageError;
use crate::pages;
use crate::server::GatewayState;
use crate::status::JobForm;

pub const JOB_FAILED_MESSAGE: &str = "Text detection did not succeed";

/// Handler for `POST /result`.
pub async fn job_result(
    State(state): State<GatewayState>,
    form: Option<Form<JobForm>>,
) -> Result<Response, PageError> {
    let job_id = JobForm::require_job_id(form)?;
    let snapshot = wait_for_terminal(state.ocr.as_ref(), &job_id, &state.wait_policy).await?;

    match snapshot.status {
        JobStatus::Succeeded => {
            let lines = map_blocks(&snapshot.blocks);
            Ok(Html(pages::results_page(&lines)).into_response())
        }
        _ => Ok(JOB_FAILED_MESSAGE.into_response()),
    }
}

/// Handler for `GET /result`.
pub async fn result_requires_post() -> &'static str {
    "This endpoint requires a POST request."
}
