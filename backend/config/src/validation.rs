//! Settings validation with user-friendly messages.

use crate::schema::Settings;
use thiserror::Error;

/// A validation problem with the offending setting and a message.
#[derive(Debug, Error)]
#[error("Settings validation error at '{path}': {message}")]
pub struct SettingsValidationError {
    pub path: String,
    pub message: String,
}

/// All errors and warnings found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<SettingsValidationError>,
    pub warnings: Vec<SettingsValidationError>,
}

impl ValidationReport {
    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(SettingsValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(SettingsValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

pub fn validate(settings: &Settings) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_storage(settings, &mut report);
    validate_server(settings, &mut report);
    validate_polling(settings, &mut report);
    report
}

fn validate_storage(settings: &Settings, report: &mut ValidationReport) {
    if settings.bucket.trim().is_empty() {
        report.error("bucket", "Bucket name cannot be empty");
    }
    if settings.region.trim().is_empty() {
        report.error("region", "Region cannot be empty");
    }
    if !settings.key_prefix.is_empty() && !settings.key_prefix.ends_with('/') {
        report.warn(
            "keyPrefix",
            format!(
                "Prefix {:?} has no trailing '/'; keys will be joined directly to filenames",
                settings.key_prefix
            ),
        );
    }
}

fn validate_server(settings: &Settings, report: &mut ValidationReport) {
    if settings.port < 1024 && settings.port != 80 && settings.port != 443 {
        report.warn(
            "port",
            format!(
                "Port {} requires elevated privileges; consider using a port >= 1024",
                settings.port
            ),
        );
    }
    if settings.max_upload_mb == 0 {
        report.error("maxUploadMb", "Upload limit must be > 0");
    }
}

fn validate_polling(settings: &Settings, report: &mut ValidationReport) {
    if settings.poll_interval_secs == 0 {
        report.error("pollIntervalSecs", "Poll interval must be > 0");
    }
    if let Some(timeout) = settings.result_timeout_secs {
        if timeout < settings.poll_interval_secs {
            report.warn(
                "resultTimeoutSecs",
                "Result timeout is shorter than the poll interval; waits will time out after one poll",
            );
        }
    }
}
