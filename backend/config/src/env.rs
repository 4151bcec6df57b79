//! Environment variable lookup and parsing.
//!
//! Values are read through a lookup map so tests can supply their own
//! environment instead of mutating the process one.

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading settings from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing env var \"{0}\"")]
    MissingVar(String),

    #[error("Invalid value {value:?} for env var \"{var_name}\": {reason}")]
    InvalidValue {
        var_name: String,
        value: String,
        reason: String,
    },

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// A snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvLookup {
    vars: HashMap<String, String>,
}

impl EnvLookup {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the trimmed value, treating empty strings as unset.
    pub fn get(&self, name: &str) -> Option<String> {
        self.vars
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// The first of `names` that is set.
    pub fn first_of(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.get(name))
    }

    pub fn require(&self, name: &str) -> Result<String, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::MissingVar(name.to_string()))
    }

    pub fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable, returning `None` when unset and an error when malformed.
    pub fn parse<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    var_name: name.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }),
        }
    }
}
