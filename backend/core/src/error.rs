use std::time::Duration;

use thiserror::Error;

/// Top-level error type for the Textra front-end.
#[derive(Debug, Error)]
pub enum TextraError {
    #[error("No file part")]
    MissingFile,

    #[error("No selected file")]
    EmptyFilename,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("jobId is required")]
    MissingJobId,

    #[error("invalid multipart body: {0}")]
    InvalidMultipart(String),

    #[error("object storage error: {0}")]
    Storage(String),

    #[error("OCR service error: {0}")]
    Ocr(String),

    #[error("job did not reach a terminal state within {0:?}")]
    Timeout(Duration),
}

impl TextraError {
    /// Whether the error was caused by the caller's input rather than a remote failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFile
                | Self::EmptyFilename
                | Self::UnsupportedFileType(_)
                | Self::MissingJobId
                | Self::InvalidMultipart(_)
        )
    }
}

pub type Result<T, E = TextraError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_classified() {
        assert!(TextraError::MissingFile.is_client_error());
        assert!(TextraError::UnsupportedFileType("scan.exe".into()).is_client_error());
        assert!(!TextraError::Ocr("expired job".into()).is_client_error());
        assert!(!TextraError::Timeout(Duration::from_secs(1)).is_client_error());
    }

    #[test]
    fn test_messages_match_page_text() {
        assert_eq!(TextraError::MissingFile.to_string(), "No file part");
        assert_eq!(TextraError::EmptyFilename.to_string(), "No selected file");
    }
}
