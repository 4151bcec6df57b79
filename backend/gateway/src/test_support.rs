//! In-memory doubles and request builders for router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};

use textra_config::Settings;
use textra_core::{
    Block, JobId, JobSnapshot, ObjectStore, OcrService, Result, StoredObject, TextraError,
    WaitPolicy,
};

use crate::server::{GatewayState, build_router};

const BOUNDARY: &str = "textra-test-boundary";

#[derive(Clone, Default)]
pub struct MockStore {
    keys: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for MockStore {
    async fn store(
        &self,
        filename: &str,
        _bytes: Vec<u8>,
        _content_type: Option<&str>,
    ) -> Result<StoredObject> {
        if self.fail {
            return Err(TextraError::Storage("AccessDenied: Access Denied".into()));
        }
        let key = format!("uploads/{filename}");
        self.keys.lock().unwrap().push(key.clone());
        Ok(StoredObject {
            bucket: "textra-bucket".into(),
            key,
        })
    }
}

#[derive(Clone)]
enum Behaviour {
    /// IN_PROGRESS for this many polls, then SUCCEEDED with `blocks`.
    Countdown(usize, Vec<Block>),
    FailedJob(String),
    Unreachable,
}

#[derive(Clone)]
pub struct MockOcr {
    behaviour: Behaviour,
    pub polls: Arc<AtomicUsize>,
    pub submits: Arc<AtomicUsize>,
}

impl MockOcr {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            polls: Arc::new(AtomicUsize::new(0)),
            submits: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn succeeding_after(pending: usize, blocks: Vec<Block>) -> Self {
        Self::with(Behaviour::Countdown(pending, blocks))
    }

    pub fn failing_job(message: &str) -> Self {
        Self::with(Behaviour::FailedJob(message.to_string()))
    }

    pub fn unreachable() -> Self {
        Self::with(Behaviour::Unreachable)
    }
}

#[async_trait]
impl OcrService for MockOcr {
    async fn submit(&self, _object: &StoredObject) -> Result<JobId> {
        self.submits.fetch_add(1, Ordering::SeqCst);
        Ok(JobId::new("job-1"))
    }

    async fn poll(&self, _job_id: &JobId) -> Result<JobSnapshot> {
        let seen = self.polls.fetch_add(1, Ordering::SeqCst);
        match &self.behaviour {
            Behaviour::Countdown(pending, _) if seen < *pending => Ok(JobSnapshot::in_progress()),
            Behaviour::Countdown(_, blocks) => Ok(JobSnapshot::succeeded(blocks.clone())),
            Behaviour::FailedJob(message) => Ok(JobSnapshot::failed(Some(message.clone()))),
            Behaviour::Unreachable => Err(TextraError::Ocr(
                "InvalidJobIdException: Request has invalid Job Id".into(),
            )),
        }
    }
}

pub fn router(store: &MockStore, ocr: &MockOcr) -> Router {
    let settings = Settings::with_bucket("textra-bucket");
    let state = GatewayState::new(Arc::new(store.clone()), Arc::new(ocr.clone()), &settings);
    build_router(state)
}

pub fn router_with(store: &MockStore, ocr: &MockOcr, policy: WaitPolicy) -> Router {
    let settings = Settings::with_bucket("textra-bucket");
    let mut state = GatewayState::new(Arc::new(store.clone()), Arc::new(ocr.clone()), &settings);
    state.wait_policy = policy;
    build_router(state)
}

pub fn multipart_request(
    uri: &str,
    field: &str,
    filename: Option<&str>,
    bytes: &[u8],
) -> Request<Body> {
    let disposition = match filename {
        Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
        None => format!("form-data; name=\"{field}\""),
    };
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\n\
         Content-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::post(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&read_text(response).await).unwrap()
}
