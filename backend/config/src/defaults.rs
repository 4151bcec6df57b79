//! Default values applied when a variable is unset.

pub const DEFAULT_REGION: &str = "us-east-1";

pub const DEFAULT_KEY_PREFIX: &str = "uploads/";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 5000;

/// Seconds between polls while waiting on `/result`.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Multipart body limit in megabytes.
pub const DEFAULT_MAX_UPLOAD_MB: usize = 20;

pub const DEFAULT_LOG_LEVEL: &str = "info";
