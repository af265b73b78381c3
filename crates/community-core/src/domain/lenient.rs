//! Lenient field decoders.
//!
//! The API is loosely typed: numbers arrive as strings, lists as
//! comma-separated text, and optional fields as `null`. These helpers are
//! used through `#[serde(deserialize_with = ...)]` together with
//! `#[serde(default)]` so a missing field also decodes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field: string, number or bool are rendered, `null` becomes empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

/// Optional text: `null` or a blank string decodes as `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(|s| Some(s).filter(|s| !s.trim().is_empty()))
}

/// Any type built from its textual form, such as a status enum.
pub fn from_text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    text(deserializer).map(T::from)
}

/// Non-negative count: integer, integral float or numeric string.
/// Anything unparsable decodes as 0.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_value(Value::deserialize(deserializer)?).unwrap_or(0))
}

/// Like [`count`], but an unparsable value stays unknown instead of 0.
/// `null`, blank text and negative numbers still read as 0. Pair with
/// `#[serde(default)]` so a missing field is unknown too.
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_value(Value::deserialize(deserializer)?))
}

fn count_value(value: Value) -> Option<u32> {
    match value {
        Value::Null => Some(0),
        Value::Number(n) => n
            .as_u64()
            .map(|v| v.min(u32::MAX as u64) as u32)
            .or_else(|| n.as_f64().map(|f| f.clamp(0.0, u32::MAX as f64) as u32)),
        Value::String(s) if s.trim().is_empty() => Some(0),
        Value::String(s) => parse_count(&s).or_else(|| s.trim().parse::<f64>().ok().filter(|f| *f < 0.0).map(|_| 0)),
        _ => None,
    }
}

/// Parse a user- or server-supplied count such as `"8"` or `" 12 "`.
pub fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u32))
}

/// List of strings: array, `null`, or a comma-separated string.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(s) => split_list(&s),
        _ => Vec::new(),
    })
}

/// Split comma-separated input, trimming entries and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
