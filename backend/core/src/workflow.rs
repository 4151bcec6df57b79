//! Upload-to-result workflow shared by every HTTP adapter.

use std::time::Duration;

use tokio::time::{sleep, timeout};
use tracing::{debug, info};

use crate::error::{Result, TextraError};
use crate::traits::{ObjectStore, OcrService};
use crate::types::{JobId, JobSnapshot, UploadRequest};
use crate::validate::validate_upload;

/// Default delay between polls while a job is still running.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Validate, store, and submit a document for text detection.
///
/// Rejected filenames never reach the store or the OCR service.
pub async fn submit_document(
    store: &dyn ObjectStore,
    ocr: &dyn OcrService,
    upload: UploadRequest,
) -> Result<JobId> {
    validate_upload(&upload.filename)?;

    let size = upload.bytes.len();
    let object = store
        .store(&upload.filename, upload.bytes, upload.content_type.as_deref())
        .await?;
    info!(bucket = %object.bucket, key = %object.key, size, "Stored upload");

    let job_id = ocr.submit(&object).await?;
    info!(job_id = %job_id, key = %object.key, "Submitted text detection job");
    Ok(job_id)
}

/// How long to wait for a job to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub interval: Duration,
    /// `None` waits until the job reaches a terminal state, however long that takes.
    pub timeout: Option<Duration>,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }
}

/// Poll a job until it succeeds or fails, sleeping `policy.interval` between polls.
///
/// Poll errors abort the wait immediately. A failed job is returned as a snapshot.
pub async fn wait_for_terminal(
    ocr: &dyn OcrService,
    job_id: &JobId,
    policy: &WaitPolicy,
) -> Result<JobSnapshot> {
    let poll_loop = async {
        let mut polls = 1u32;
        let mut snapshot = ocr.poll(job_id).await?;
        while !snapshot.status.is_terminal() {
            debug!(job_id = %job_id, polls, "Job still in progress");
            sleep(policy.interval).await;
            snapshot = ocr.poll(job_id).await?;
            polls += 1;
        }
        info!(job_id = %job_id, status = %snapshot.status, polls, "Job reached terminal state");
        Ok::<_, TextraError>(snapshot)
    };

    match policy.timeout {
        Some(limit) => timeout(limit, poll_loop)
            .await
            .map_err(|_| TextraError::Timeout(limit))?,
        None => poll_loop.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Block, JobStatus, StoredObject};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::time::Instant;

    #[derive(Default)]
    struct RecordingStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ObjectStore for RecordingStore {
        async fn store(
            &self,
            filename: &str,
            _bytes: Vec<u8>,
            _content_type: Option<&str>,
        ) -> Result<StoredObject> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(StoredObject {
                bucket: "bucket".into(),
                key: format!("uploads/{filename}"),
            })
        }
    }

    /// Reports IN_PROGRESS for the first `pending` polls, then SUCCEEDED.
    struct CountdownOcr {
        pending: usize,
        submits: AtomicUsize,
        poll_times: Mutex<Vec<Instant>>,
        submitted: Mutex<Vec<StoredObject>>,
    }

    impl CountdownOcr {
        fn new(pending: usize) -> Self {
            Self {
                pending,
                submits: AtomicUsize::new(0),
                poll_times: Mutex::new(Vec::new()),
                submitted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl OcrService for CountdownOcr {
        async fn submit(&self, object: &StoredObject) -> Result<JobId> {
            self.submits.fetch_add(1, Ordering::SeqCst);
            self.submitted.lock().unwrap().push(object.clone());
            Ok(JobId::new("job-1"))
        }

        async fn poll(&self, _job_id: &JobId) -> Result<JobSnapshot> {
            let mut times = self.poll_times.lock().unwrap();
            times.push(Instant::now());
            if times.len() <= self.pending {
                Ok(JobSnapshot::in_progress())
            } else {
                Ok(JobSnapshot::succeeded(vec![Block::line("done", 90.0)]))
            }
        }
    }

    struct BrokenOcr;

    #[async_trait]
    impl OcrService for BrokenOcr {
        async fn submit(&self, _object: &StoredObject) -> Result<JobId> {
            Err(TextraError::Ocr("access denied".into()))
        }

        async fn poll(&self, _job_id: &JobId) -> Result<JobSnapshot> {
            Err(TextraError::Ocr("invalid job id".into()))
        }
    }

    fn upload(name: &str) -> UploadRequest {
        UploadRequest {
            filename: name.to_string(),
            content_type: None,
            bytes: b"%PDF-1.4".to_vec(),
        }
    }

    #[tokio::test]
    async fn test_submit_document_stores_then_submits() {
        let store = RecordingStore::default();
        let ocr = CountdownOcr::new(0);

        let job_id = submit_document(&store, &ocr, upload("scan.pdf")).await.unwrap();

        assert_eq!(job_id.as_str(), "job-1");
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
        let submitted = ocr.submitted.lock().unwrap();
        assert_eq!(submitted[0].key, "uploads/scan.pdf");
    }

    #[tokio::test]
    async fn test_rejected_upload_touches_nothing() {
        let store = RecordingStore::default();
        let ocr = CountdownOcr::new(0);

        let err = submit_document(&store, &ocr, upload("scan.exe")).await.unwrap_err();

        assert!(matches!(err, TextraError::UnsupportedFileType(_)));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
        assert_eq!(ocr.submits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_error_propagates() {
        let store = RecordingStore::default();
        let err = submit_document(&store, &BrokenOcr, upload("scan.png")).await.unwrap_err();
        assert!(matches!(err, TextraError::Ocr(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_sleeps_between_each_poll() {
        let ocr = CountdownOcr::new(3);
        let policy = WaitPolicy::default();
        let started = Instant::now();

        let snapshot = wait_for_terminal(&ocr, &JobId::new("job-1"), &policy)
            .await
            .unwrap();

        assert_eq!(snapshot.status, JobStatus::Succeeded);
        let times = ocr.poll_times.lock().unwrap();
        assert_eq!(times.len(), 4);
        assert_eq!(times[0], started);
        for pair in times.windows(2) {
            assert_eq!(pair[1] - pair[0], DEFAULT_POLL_INTERVAL);
        }
        assert_eq!(started.elapsed(), DEFAULT_POLL_INTERVAL * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_terminal_job_returns_without_sleeping() {
        let ocr = CountdownOcr::new(0);
        let started = Instant::now();

        wait_for_terminal(&ocr, &JobId::new("job-1"), &WaitPolicy::default())
            .await
            .unwrap();

        assert_eq!(ocr.poll_times.lock().unwrap().len(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_honours_timeout() {
        let ocr = CountdownOcr::new(usize::MAX);
        let policy = WaitPolicy {
            interval: Duration::from_secs(5),
            timeout: Some(Duration::from_secs(12)),
        };

        let err = wait_for_terminal(&ocr, &JobId::new("job-1"), &policy)
            .await
            .unwrap_err();

        assert!(matches!(err, TextraError::Timeout(d) if d == Duration::from_secs(12)));
        assert_eq!(ocr.poll_times.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_poll_error_aborts_wait() {
        let err = wait_for_terminal(&BrokenOcr, &JobId::new("gone"), &WaitPolicy::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TextraError::Ocr(_)));
    }
}
