//! Response envelope normalization
//!
//! Depending on how the Lambda integration is wired, a list endpoint answers
//! with the list under a named field, under `data`, as a bare array, or with
//! the whole payload JSON-encoded inside a `body` string. Everything is
//! reduced to one canonical list here so view models never see envelopes.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

pub const PROJECT_KEYS: &[&str] = &["projects"];
pub const APPLICATION_KEYS: &[&str] = &["applications"];
pub const VOLUNTEER_KEYS: &[&str] = &["data", "volunteers"];

/// Unwrap a proxy-style `body` field, which may be an object or a
/// JSON-encoded string. Values without `body` are returned unchanged.
pub fn unwrap_body(value: Value) -> Result<Value, ApiError> {
    match value {
        Value::Object(mut map) if map.contains_key("body") => match map.remove("body") {
            Some(Value::String(raw)) if raw.trim().is_empty() => Ok(Value::Null),
            Some(Value::String(raw)) => Ok(serde_json::from_str(&raw)?),
            Some(inner) => Ok(inner),
            None => Ok(Value::Null),
        },
        other => Ok(other),
    }
}

/// Extract a list from the first present key in `keys`. A bare array is
/// accepted as-is; a response with none of the keys is an empty list.
pub fn extract_list<T: DeserializeOwned>(value: Value, keys: &[&str]) -> Result<Vec<T>, ApiError> {
    let value = unwrap_body(value)?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => keys
            .iter()
            .find_map(|key| map.remove(*key).filter(|v| !v.is_null()))
            .unwrap_or(Value::Array(Vec::new())),
        _ => Value::Array(Vec::new()),
    };

    Ok(serde_json::from_value(list)?)
}
