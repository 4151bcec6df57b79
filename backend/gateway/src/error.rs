//! Error responses.
//!
//! Client input errors are 400 on every endpoint. Remote storage/OCR failures
//! are 502 and an expired result wait is 504.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use textra_core::TextraError;
use textra_logging::redact_sensitive_data;

pub fn status_code(err: &TextraError) -> StatusCode {
    match err {
        e if e.is_client_error() => StatusCode::BAD_REQUEST,
        TextraError::Storage(_) | TextraError::Ocr(_) => StatusCode::BAD_GATEWAY,
        TextraError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Logs the error and returns its status with a redacted message.
fn report(err: &TextraError) -> (StatusCode, String) {
    let status = status_code(err);
    let message = redact_sensitive_data(&err.to_string());
    if status.is_client_error() {
        warn!(status = status.as_u16(), error = %message, "Rejected request");
    } else {
        error!(status = status.as_u16(), error = %message, "Request failed");
    }
    (status, message)
}

/// Error rendered as `{"error": message}` for the JSON endpoints.
#[derive(Debug)]
pub struct ApiError(pub TextraError);

impl From<TextraError> for ApiError {
    fn from(err: TextraError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = report(&self.0);
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Error rendered as plain text for the page endpoints.
#[derive(Debug)]
pub struct PageError(pub TextraError);

impl From<TextraError> for PageError {
    fn from(err: TextraError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        report(&self.0).into_response()
    }
}
