//! Textract-backed asynchronous text detection.

use async_trait::async_trait;
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::types::{self as tx, DocumentLocation, S3Object};
use aws_sdk_textract::Client;
use tracing::{debug, warn};

use textra_core::{
    Block, BlockType, JobId, JobSnapshot, JobStatus, OcrService, Result, StoredObject,
    TextraError,
};

/// Starts and polls `DocumentTextDetection` jobs.
#[derive(Clone)]
pub struct TextractOcrService {
    client: Client,
}

impl TextractOcrService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Map a Textract job status onto ours.
///
/// `PARTIAL_SUCCESS` still carries usable blocks, so it counts as success.
pub fn convert_status(status: &tx::JobStatus) -> Result<JobStatus> {
    match status {
        tx::JobStatus::InProgress => Ok(JobStatus::InProgress),
        tx::JobStatus::Succeeded => Ok(JobStatus::Succeeded),
        tx::JobStatus::PartialSuccess => {
            warn!("Textract reported PARTIAL_SUCCESS; treating as succeeded");
            Ok(JobStatus::Succeeded)
        }
        tx::JobStatus::Failed => Ok(JobStatus::Failed),
        other => Err(TextraError::Ocr(format!(
            "unrecognised job status {}",
            other.as_str()
        ))),
    }
}

pub fn convert_block(block: &tx::Block) -> Block {
    let block_type = match block.block_type() {
        Some(tx::BlockType::Page) => BlockType::Page,
        Some(tx::BlockType::Line) => BlockType::Line,
        Some(tx::BlockType::Word) => BlockType::Word,
        _ => BlockType::Other,
    };
    Block {
        block_type,
        text: block.text().map(str::to_string),
        confidence: block.confidence(),
    }
}

#[async_trait]
impl OcrService for TextractOcrService {
    async fn submit(&self, object: &StoredObject) -> Result<JobId> {
        let location = DocumentLocation::builder()
            .s3_object(
                S3Object::builder()
                    .bucket(&object.bucket)
                    .name(&object.key)
                    .build(),
            )
            .build();

        let output = self
            .client
            .start_document_text_detection()
            .document_location(location)
            .send()
            .await
            .map_err(|e| TextraError::Ocr(DisplayErrorContext(&e).to_string()))?;

        output
            .job_id()
            .map(JobId::new)
            .ok_or_else(|| TextraError::Ocr("Textract returned no JobId".to_string()))
    }

    async fn poll(&self, job_id: &JobId) -> Result<JobSnapshot> {
        let mut next_token: Option<String> = None;
        let mut blocks = Vec::new();
        let mut pages = 0u32;

        loop {
            let output = self
                .client
                .get_document_text_detection()
                .job_id(job_id.as_str())
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| TextraError::Ocr(DisplayErrorContext(&e).to_string()))?;
            pages += 1;

            let status = output
                .job_status()
                .ok_or_else(|| TextraError::Ocr("Textract returned no JobStatus".to_string()))
                .and_then(convert_status)?;

            match status {
                JobStatus::InProgress => return Ok(JobSnapshot::in_progress()),
                JobStatus::Failed => {
                    return Ok(JobSnapshot::failed(
                        output.status_message().map(str::to_string),
                    ))
                }
                JobStatus::Succeeded => {}
            }

            blocks.extend(output.blocks().iter().map(convert_block));

            // Large documents are returned in pages of up to 1000 blocks.
            match output.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        debug!(job_id = %job_id, pages, blocks = blocks.len(), "Fetched detection results");
        Ok(JobSnapshot::succeeded(blocks))
    }
}
