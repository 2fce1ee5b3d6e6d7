//! Captured request/response records as supplied by the proxy log
//!
//! Header maps arrive as JSON object blobs (`{"Content-Type": ["text/xml"]}`)
//! rather than structured values.

use crate::error::RenderError;
use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;

/// A logged HTTP request/response pair
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLog {
    pub id: String,

    /// Unix seconds
    pub time: i64,

    pub method: String,

    /// URL the client called on the proxy
    #[serde(default)]
    pub proxy_url: String,

    /// Upstream URL the proxy forwarded to
    pub url: String,

    #[serde(default)]
    pub request_headers: String,

    #[serde(default)]
    pub request_body: String,

    pub status: u16,

    #[serde(default)]
    pub response_headers: String,

    #[serde(default)]
    pub response_body: String,
}

impl RequestLog {
    /// Parse a log record from JSON
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Request headers, empty if the blob is unusable
    pub fn request_header_entries(&self) -> Vec<HeaderEntry> {
        header_entries(&self.request_headers).unwrap_or_default()
    }

    /// Response headers, empty if the blob is unusable
    pub fn response_header_entries(&self) -> Vec<HeaderEntry> {
        header_entries(&self.response_headers).unwrap_or_default()
    }

    /// Content-type hint for the request body
    pub fn request_content_type(&self) -> Option<String> {
        content_type_of(&self.request_header_entries()).map(str::to_string)
    }

    /// Content-type hint for the response body
    pub fn response_content_type(&self) -> Option<String> {
        content_type_of(&self.response_header_entries()).map(str::to_string)
    }

    pub fn status_class(&self) -> StatusClass {
        StatusClass::of(self.status)
    }
}

/// A single header, multi-valued headers already joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
}

/// Status code bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Redirect,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusClass {
    pub fn of(status: u16) -> Self {
        match status {
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Unknown,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Success => "2xx",
            StatusClass::Redirect => "3xx",
            StatusClass::ClientError => "4xx",
            StatusClass::ServerError => "5xx",
            StatusClass::Unknown => "unknown",
        }
    }
}

/// Upper-cased, trimmed method; `UNKNOWN` when blank
pub fn normalize_method(method: &str) -> String {
    let normalized = method.trim().to_uppercase();
    if normalized.is_empty() {
        "UNKNOWN".to_string()
    } else {
        normalized
    }
}

/// Format unix seconds as `YYYY-MM-DD HH:MM:SS` (UTC)
pub fn format_timestamp(unix_seconds: i64) -> String {
    DateTime::from_timestamp(unix_seconds, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

fn header_value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flatten a JSON header blob into entries, keeping source order.
///
/// Array values are joined with `", "`. Valid JSON that is not an object
/// yields no entries.
pub fn header_entries(raw: &str) -> Result<Vec<HeaderEntry>, RenderError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: Value = serde_json::from_str(raw).map_err(RenderError::Headers)?;
    let Value::Object(map) = parsed else {
        return Ok(Vec::new());
    };

    let entries = map
        .into_iter()
        .map(|(key, value)| {
            let value = match &value {
                Value::Array(items) => items
                    .iter()
                    .map(header_value_text)
                    .collect::<Vec<_>>()
                    .join(", "),
                other => header_value_text(other),
            };
            HeaderEntry { key, value }
        })
        .collect();

    Ok(entries)
}

/// Value of the first `Content-Type` header (ASCII case-insensitive)
pub fn content_type_of(entries: &[HeaderEntry]) -> Option<&str> {
    entries
        .iter()
        .find(|e| e.key.eq_ignore_ascii_case("content-type"))
        .map(|e| e.value.as_str())
}
