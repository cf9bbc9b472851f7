//! Minimal HAR 1.2 structures for failure triage.
//!
//! Every field is optional: exporters disagree on what they emit, and a
//! missing, null or oddly typed value degrades to an empty default for that
//! entry instead of rejecting the whole capture.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Root HAR document (top-level `{"log": ...}` wrapper).
#[derive(Debug, Default, Deserialize)]
pub struct Capture {
    #[serde(default, deserialize_with = "null_as_default")]
    pub log: HarLog,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarLog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub request: HarRequest,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: HarResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub method: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarResponse {
    /// 0 when absent or not a number, so it never counts as a failure.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: i64,
    #[serde(default, rename = "statusText", deserialize_with = "lenient_string")]
    pub status_text: String,
    /// Kept as raw JSON; a malformed value only affects this entry's snippet.
    #[serde(default)]
    pub content: Option<Value>,
}

impl Capture {
    pub fn entries(&self) -> &[HarEntry] {
        &self.log.entries
    }
}

impl HarResponse {
    /// Response body text, if `content.text` is present and a string.
    pub fn body_text(&self) -> Option<&str> {
        self.content.as_ref()?.get("text")?.as_str()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Strings verbatim, null as `""`, other scalars in their JSON spelling.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Integer statuses as-is, integral floats truncated, anything else 0.
fn lenient_status<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let status = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    };
    Ok(status)
}
