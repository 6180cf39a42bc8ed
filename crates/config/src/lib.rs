//! Tolerant decoding of JSON config blobs into flat string maps.
//!
//! [`parse`] is total: malformed input (including the partial JSON a user
//! types mid-edit) degrades to an empty map instead of an error. [`validate`]
//! is the strict variant used only for hints at the configuration-editing
//! boundary.

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid JSON")]
    InvalidJson,

    #[error("must be a JSON object")]
    NotAnObject,

    #[error("value for key '{key}' must be a string")]
    NonStringValue { key: String },
}

/// Decodes a JSON object of string values into a flat map, discarding every
/// non-conforming entry. Empty or whitespace-only input, invalid JSON, and
/// non-object JSON all yield an empty map; entries with non-string values
/// are silently dropped. Never fails.
#[must_use]
pub fn parse(raw: &str) -> BTreeMap<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return BTreeMap::new();
    }
    let Ok(Value::Object(object)) = serde_json::from_str::<Value>(trimmed) else {
        return BTreeMap::new();
    };
    object
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, text)),
            _ => None,
        })
        .collect()
}

/// Strict counterpart of [`parse`] for editing-boundary hints: reports the
/// first reason the blob would not decode losslessly. Empty input is valid
/// ("resolves nothing yet" is a legitimate state, not a mistake).
pub fn validate(raw: &str) -> Result<(), ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let parsed: Value =
        serde_json::from_str(trimmed).map_err(|_| ConfigError::InvalidJson)?;
    let Value::Object(object) = parsed else {
        return Err(ConfigError::NotAnObject);
    };
    for (key, value) in object {
        if !value.is_string() {
            return Err(ConfigError::NonStringValue { key });
        }
    }
    Ok(())
}
