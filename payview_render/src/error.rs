//! Error types for the render pipeline
//!
//! None of these escape the public render functions; they are signals that
//! route a payload to a less specific rendering path.

use thiserror::Error;

/// Render errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Search term could not be compiled: {0}")]
    SearchPattern(#[from] regex::Error),

    #[error("Header blob is not valid JSON: {0}")]
    Headers(#[source] serde_json::Error),
}
