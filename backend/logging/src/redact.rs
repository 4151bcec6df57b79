//! Log Redaction
//!
//! Scrubs AWS credentials and bearer tokens from strings prior to logging.

use regex::Regex;
use std::sync::LazyLock;

static ACCESS_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(AKIA|ASIA)[A-Z0-9]{16}\b").unwrap());
static SECRET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(aws_secret_access_key|secret_access_key|x-amz-security-token)\s*[=:]\s*\S+")
        .unwrap()
});
static BEARER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9\-\._~+/]+=*").unwrap());

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = ACCESS_KEY_RE.replace_all(input, "[REDACTED_KEY_ID]");
    let redacted = SECRET_RE.replace_all(&redacted, "$1=[REDACTED_SECRET]");
    BEARER_RE
        .replace_all(&redacted, "[REDACTED_TOKEN]")
        .into_owned()
}
