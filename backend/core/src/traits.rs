use async_trait::async_trait;

use crate::error::Result;
use crate::types::{JobId, JobSnapshot, StoredObject};

/// Blob storage that holds uploaded documents until the OCR service reads them.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload `bytes` under the configured prefix and return where they landed.
    ///
    /// Transport and auth failures surface as `TextraError::Storage`; nothing is retried.
    async fn store(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<StoredObject>;
}

/// An asynchronous text-detection service.
#[async_trait]
pub trait OcrService: Send + Sync {
    /// Start detection for a stored document. Returns as soon as the job is accepted.
    async fn submit(&self, object: &StoredObject) -> Result<JobId>;

    /// Query a job once. A failed job is a snapshot, not an error.
    async fn poll(&self, job_id: &JobId) -> Result<JobSnapshot>;
}
