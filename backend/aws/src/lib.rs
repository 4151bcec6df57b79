//! AWS implementations of the Textra storage and OCR traits.

pub mod sdk;
pub mod storage;
pub mod textract;

pub use sdk::load_sdk_config;
pub use storage::S3ObjectStore;
pub use textract::TextractOcrService;

use textra_config::Settings;

/// Build both clients from one SDK configuration.
pub async fn build_clients(settings: &Settings) -> (S3ObjectStore, TextractOcrService) {
    let sdk_config = load_sdk_config(settings).await;
    let store = S3ObjectStore::new(
        aws_sdk_s3::Client::new(&sdk_config),
        settings.bucket.clone(),
        settings.key_prefix.clone(),
    );
    let ocr = TextractOcrService::new(aws_sdk_textract::Client::new(&sdk_config));
    (store, ocr)
}
