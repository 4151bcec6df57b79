//! S3-backed object store.

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::{debug, error};

use textra_core::validate::extension;
use textra_core::{ObjectStore, Result, StoredObject, TextraError};

/// Uploads documents to a single bucket under a fixed key prefix.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix: prefix.into(),
        }
    }

    pub fn key_for(&self, filename: &str) -> String {
        object_key(&self.prefix, filename)
    }
}

/// `prefix + filename`; the same filename always maps to the same key.
pub fn object_key(prefix: &str, filename: &str) -> String {
    format!("{prefix}{filename}")
}

/// MIME type for an allowed upload, by extension.
pub fn content_type_for(filename: &str) -> Option<&'static str> {
    let ext = extension(filename)?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "pdf" => Some("application/pdf"),
        "doc" => Some("application/msword"),
        "docx" => {
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        _ => None,
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn store(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<StoredObject> {
        let key = self.key_for(filename);
        let content_type = content_type
            .filter(|ct| !ct.is_empty() && *ct != "application/octet-stream")
            .or_else(|| content_type_for(filename));
        debug!(bucket = %self.bucket, key = %key, content_type, "Uploading to S3");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .set_content_type(content_type.map(str::to_string))
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| {
                error!(bucket = %self.bucket, key = %key, "S3 upload failed");
                TextraError::Storage(DisplayErrorContext(&e).to_string())
            })?;

        Ok(StoredObject {
            bucket: self.bucket.clone(),
            key,
        })
    }
}
