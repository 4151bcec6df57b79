//! Settings redaction: produce safe-to-log snapshots by masking credentials.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static SENSITIVE_KEYS: &[&str] = &[
    "accessKeyId",
    "access_key_id",
    "secretAccessKey",
    "secret_access_key",
    "sessionToken",
    "session_token",
    "token",
    "secret",
    "password",
];

/// AWS access key IDs, wherever they appear.
static ACCESS_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(AKIA|ASIA)[A-Z0-9]{16}$").unwrap());

/// Redact a settings JSON value, masking every sensitive field.
pub fn redact(value: &Value) -> Value {
    redact_recursive(value, "")
}

fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn mask(s: &str) -> String {
    // Keep a 4-char hint for anything long enough to identify.
    if s.len() > 8 {
        format!("{}***", s.chars().take(4).collect::<String>())
    } else {
        "***".to_string()
    }
}

fn redact_string(s: &str, key: &str) -> Value {
    if !s.is_empty() && (is_sensitive_key(key) || ACCESS_KEY_PATTERN.is_match(s)) {
        return Value::String(mask(s));
    }
    Value::String(s.to_string())
}

fn redact_recursive(value: &Value, key: &str) -> Value {
    match value {
        Value::String(s) => redact_string(s, key),
        Value::Array(arr) => Value::Array(arr.iter().map(|v| redact_recursive(v, key)).collect()),
        Value::Object(map) => {
            let mut result = serde_json::Map::new();
            for (k, v) in map {
                result.insert(k.clone(), redact_recursive(v, k));
            }
            Value::Object(result)
        }
        other => other.clone(),
    }
}
