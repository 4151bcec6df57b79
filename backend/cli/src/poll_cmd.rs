//! CLI Poll Command
//!
//! Asks a running server for one status update on a job.

use anyhow::{bail, Result};
use serde::Deserialize;

use textra_core::{ExtractedLine, JobStatus};

use crate::terminal_output::{note_info, note_success, note_warn, render_lines};

/// Body returned by `POST /status`, success or error.
#[derive(Debug, Deserialize)]
struct StatusReply {
    status: Option<JobStatus>,
    #[serde(default)]
    data: Option<Vec<ExtractedLine>>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub async fn run(server: &str, job_id: &str) -> Result<()> {
    let url = format!("{}/status", server.trim_end_matches('/'));
    let reply: StatusReply = reqwest::Client::new()
        .post(&url)
        .form(&[("jobId", job_id)])
        .send()
        .await?
        .json()
        .await?;

    print_reply(job_id, reply)
}

fn print_reply(job_id: &str, reply: StatusReply) -> Result<()> {
    if let Some(error) = reply.error {
        bail!("server rejected poll for {job_id}: {error}");
    }
    match reply.status {
        Some(JobStatus::InProgress) => note_info(&format!("Job {job_id} is still in progress")),
        Some(JobStatus::Failed) => note_warn(&format!(
            "Job {job_id} failed: {}",
            reply.message.as_deref().unwrap_or("no reason given")
        )),
        Some(JobStatus::Succeeded) => {
            let lines = reply.data.unwrap_or_default();
            note_success(&format!("Job {job_id} succeeded with {} line(s)", lines.len()));
            print!("{}", render_lines(&lines));
        }
        None => bail!("server returned no status for {job_id}"),
    }
    Ok(())
}
