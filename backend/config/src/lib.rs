//! `textra-config`: runtime settings for the Textra service.
//!
//! Provides:
//! - Typed settings sourced from environment variables
//! - Default values
//! - Validation with errors and warnings
//! - Redaction for safe logging

pub mod defaults;
pub mod env;
pub mod redact;
pub mod schema;
pub mod validation;

pub use env::{ConfigError, EnvLookup};
pub use redact::redact;
pub use schema::{Settings, StaticCredentials};
pub use validation::{validate, SettingsValidationError, ValidationReport};

/// Validate settings, logging warnings and failing on the first error.
pub fn validated(settings: Settings) -> Result<Settings, ConfigError> {
    let report = validate(&settings);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Settings warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Settings error");
    }
    if let Some(first) = report.errors.into_iter().next() {
        return Err(ConfigError::Invalid(first.to_string()));
    }
    Ok(settings)
}
