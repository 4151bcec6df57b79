use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier issued by the OCR service for a text-detection job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A document uploaded by a client.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Location of an uploaded document in object storage.
///
/// Keys are `prefix + filename`, so uploading the same filename twice
/// overwrites the earlier object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
}

/// Granularity of a block returned by the OCR service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Page,
    Line,
    Word,
    /// Tables, key-value sets, signatures and anything else.
    #[serde(other)]
    Other,
}

/// A typed block of detected text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub block_type: BlockType,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub confidence: Option<f32>,
}

impl Block {
    pub fn line(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            block_type: BlockType::Line,
            text: Some(text.into()),
            confidence: Some(confidence),
        }
    }

    pub fn word(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            block_type: BlockType::Word,
            text: Some(text.into()),
            confidence: Some(confidence),
        }
    }
}

/// Status of a text-detection job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    InProgress,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state of a job as observed by a single poll.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSnapshot {
    pub status: JobStatus,
    /// Populated only once the job has succeeded.
    pub blocks: Vec<Block>,
    pub status_message: Option<String>,
}

impl JobSnapshot {
    pub fn in_progress() -> Self {
        Self {
            status: JobStatus::InProgress,
            blocks: Vec::new(),
            status_message: None,
        }
    }

    pub fn succeeded(blocks: Vec<Block>) -> Self {
        Self {
            status: JobStatus::Succeeded,
            blocks,
            status_message: None,
        }
    }

    pub fn failed(message: Option<String>) -> Self {
        Self {
            status: JobStatus::Failed,
            blocks: Vec::new(),
            status_message: message,
        }
    }
}

/// One line of extracted text with the service's confidence (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedLine {
    pub text: String,
    pub confidence: f32,
}
