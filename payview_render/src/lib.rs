//! Payview Render - safe, syntax-highlighted HTML for HTTP payload bodies
//!
//! Bodies are classified as plain text, JSON or XML, tokenized for colouring
//! and escaped so that payload content can never break out of the element the
//! markup is injected into. An optional search term is marked on top of every
//! rendering path.
//!
//! Every function here is pure: no state survives between calls.

pub mod classify;
pub mod error;
pub mod escape;
pub mod highlight;
pub mod json;
pub mod log;
pub mod tokenize;
pub mod xml;

pub use classify::{detect_body_syntax, is_likely_xml, normalize_content_type, parse_json, SyntaxKind};
pub use error::RenderError;
pub use escape::escape_html;
pub use highlight::{highlight_segment, Highlighter};
pub use log::{HeaderEntry, RequestLog, StatusClass};

/// Text to display for a body: pretty-printed for JSON, verbatim otherwise
pub fn format_body_for_display(body: &str, syntax: SyntaxKind) -> String {
    if body.is_empty() {
        return String::new();
    }

    match syntax {
        SyntaxKind::Json => json::pretty_json(body).unwrap_or_else(|e| {
            tracing::debug!("Showing JSON body verbatim: {}", e);
            body.to_string()
        }),
        SyntaxKind::Xml | SyntaxKind::Plain => body.to_string(),
    }
}

/// Full pipeline: classify, format, tokenize and highlight a body
pub fn render_payload_html(body: &str, search_term: &str, content_type: Option<&str>) -> String {
    if body.is_empty() {
        return String::new();
    }

    let highlighter = Highlighter::for_term(search_term);

    match detect_body_syntax(body, content_type) {
        SyntaxKind::Json => match json::pretty_json(body) {
            Ok(pretty) => json::render_json(&pretty, &highlighter),
            Err(e) => {
                tracing::debug!("Rendering declared JSON body as plain text: {}", e);
                highlighter.segment(body)
            }
        },
        SyntaxKind::Xml => xml::render_xml(body, &highlighter),
        SyntaxKind::Plain => highlighter.segment(body),
    }
}

/// Search highlighting without syntax colouring (headers, URLs)
pub fn highlight_text(text: &str, search_term: &str) -> String {
    highlight_segment(text, search_term)
}
