//! Upload filename checks.
//!
//! Only the extension is inspected; file contents are never sniffed, so a
//! renamed binary with an allowed suffix is accepted.

use crate::error::{Result, TextraError};

/// Extensions accepted for upload, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "pdf", "doc", "docx"];

/// Returns the extension after the last `.`, if any.
pub fn extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

pub fn is_allowed_file(filename: &str) -> bool {
    extension(filename)
        .map(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Validate an upload filename, distinguishing an empty name from a bad type.
pub fn validate_upload(filename: &str) -> Result<()> {
    if filename.is_empty() {
        return Err(TextraError::EmptyFilename);
    }
    if !is_allowed_file(filename) {
        return Err(TextraError::UnsupportedFileType(filename.to_string()));
    }
    Ok(())
}
