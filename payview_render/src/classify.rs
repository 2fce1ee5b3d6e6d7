//! Syntax detection for payload bodies
//!
//! Declared content-type wins over structural sniffing. Sniffing tries a full
//! JSON parse first, then a cheap structural XML check.

use crate::error::RenderError;
use crate::xml::{XmlNode, XML_NODE_RE};
use std::fmt;

/// Rendering path chosen for a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    Plain,
    Json,
    Xml,
}

impl SyntaxKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxKind::Plain => "plain",
            SyntaxKind::Json => "json",
            SyntaxKind::Xml => "xml",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strip parameters (`; charset=...`), trim and lower-case a content-type
pub fn normalize_content_type(hint: &str) -> String {
    hint.split(';').next().unwrap_or_default().trim().to_lowercase()
}

fn is_json_media_type(media_type: &str) -> bool {
    media_type == "application/json" || media_type.ends_with("+json")
}

fn is_xml_media_type(media_type: &str) -> bool {
    matches!(media_type, "application/xml" | "text/xml") || media_type.ends_with("+xml")
}

/// Parse a body as JSON
pub fn parse_json(body: &str) -> Result<serde_json::Value, RenderError> {
    Ok(serde_json::from_str(body)?)
}

/// Decide which rendering path a body takes
pub fn detect_body_syntax(body: &str, content_type: Option<&str>) -> SyntaxKind {
    if body.is_empty() {
        return SyntaxKind::Plain;
    }

    let media_type = normalize_content_type(content_type.unwrap_or_default());
    let syntax = if is_json_media_type(&media_type) {
        SyntaxKind::Json
    } else if is_xml_media_type(&media_type) {
        SyntaxKind::Xml
    } else if parse_json(body).is_ok() {
        SyntaxKind::Json
    } else if is_likely_xml(body) {
        SyntaxKind::Xml
    } else {
        SyntaxKind::Plain
    };

    tracing::trace!(%media_type, %syntax, "Detected body syntax");
    syntax
}

fn has_stray_bracket(gap: &str) -> bool {
    gap.contains(['<', '>'])
}

/// Structural XML check: recognised nodes only, separated by bracket-free
/// text, with balanced element nesting and at least one element.
///
/// This is a sniffing heuristic, not a validator; attribute syntax and
/// character data are not checked.
pub fn is_likely_xml(body: &str) -> bool {
    let trimmed = body.trim();
    if !trimmed.starts_with('<') || !trimmed.ends_with('>') {
        return false;
    }

    let mut open: Vec<&str> = Vec::new();
    let mut saw_element = false;
    let mut last = 0;

    for m in XML_NODE_RE.find_iter(trimmed) {
        if has_stray_bracket(&trimmed[last..m.start()]) {
            return false;
        }
        last = m.end();

        match XmlNode::parse(m.as_str()) {
            Some(XmlNode::Open { name }) => {
                saw_element = true;
                open.push(name);
            }
            Some(XmlNode::Close { name }) => {
                saw_element = true;
                if open.pop() != Some(name) {
                    return false;
                }
            }
            Some(XmlNode::SelfClosing { .. }) => saw_element = true,
            Some(XmlNode::Comment | XmlNode::Prolog) | None => {}
        }
    }

    if has_stray_bracket(&trimmed[last..]) {
        return false;
    }

    saw_element && open.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_plain() {
        assert_eq!(detect_body_syntax("", None), SyntaxKind::Plain);
        assert_eq!(detect_body_syntax("", Some("")), SyntaxKind::Plain);
        assert_eq!(detect_body_syntax("", Some("application/json")), SyntaxKind::Plain);
    }

    #[test]
    fn test_structural_detection() {
        assert_eq!(detect_body_syntax(r#"{"a":1}"#, Some("")), SyntaxKind::Json);
        assert_eq!(detect_body_syntax("<a>1</a>", Some("")), SyntaxKind::Xml);
        assert_eq!(detect_body_syntax("plain text", Some("")), SyntaxKind::Plain);
        assert_eq!(detect_body_syntax("  [1, 2, 3]\n", None), SyntaxKind::Json);
        assert_eq!(detect_body_syntax("42", None), SyntaxKind::Json);
    }

    #[test]
    fn test_content_type_wins() {
        assert_eq!(
            detect_body_syntax("not json", Some("application/json")),
            SyntaxKind::Json
        );
        assert_eq!(
            detect_body_syntax(r#"{"a":1}"#, Some("text/xml")),
            SyntaxKind::Xml
        );
        assert_eq!(
            detect_body_syntax("anything", Some("application/problem+json")),
            SyntaxKind::Json
        );
        assert_eq!(
            detect_body_syntax("anything", Some("application/atom+xml")),
            SyntaxKind::Xml
        );
    }

    #[test]
    fn test_content_type_normalization() {
        assert_eq!(
            normalize_content_type("  Application/JSON ; charset=UTF-8"),
            "application/json"
        );
        assert_eq!(normalize_content_type(""), "");
        assert_eq!(
            detect_body_syntax("x", Some("TEXT/XML; charset=utf-8")),
            SyntaxKind::Xml
        );
    }

    #[test]
    fn test_unknown_content_type_falls_back_to_sniffing() {
        assert_eq!(
            detect_body_syntax(r#"{"ok":true}"#, Some("text/plain")),
            SyntaxKind::Json
        );
        assert_eq!(
            detect_body_syntax("<root/>", Some("application/octet-stream")),
            SyntaxKind::Xml
        );
        assert_eq!(
            detect_body_syntax("{broken", Some("text/html")),
            SyntaxKind::Plain
        );
    }

    #[test]
    fn test_xml_balance() {
        assert!(is_likely_xml("<a><b></b></a>"));
        assert!(!is_likely_xml("<a><b></a></b>"));
        assert!(is_likely_xml("<a/>"));
        assert!(!is_likely_xml("</a>"));
        assert!(!is_likely_xml("<a>"));
    }

    #[test]
    fn test_xml_with_declarations() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE note>
<!-- a <comment> with brackets -->
<note id="7" lang='en'>
  <to>Tove</to>
  <empty />
</note>"#;
        assert!(is_likely_xml(doc));
        assert_eq!(detect_body_syntax(doc, None), SyntaxKind::Xml);
    }

    #[test]
    fn test_xml_needs_an_element() {
        assert!(!is_likely_xml("<!-- only a comment -->"));
        assert!(!is_likely_xml(r#"<?xml version="1.0"?>"#));
    }

    #[test]
    fn test_xml_rejects_stray_brackets() {
        assert!(!is_likely_xml("<a>1 < 2</a>"));
        assert!(!is_likely_xml("<a>x</a> >"));
        assert!(!is_likely_xml("<a>text"));
        assert!(!is_likely_xml("hello <a></a>"));
    }

    #[test]
    fn test_html_like_fragments() {
        assert!(is_likely_xml("<p>Hi <b>there</b></p>"));
        assert!(!is_likely_xml("<br><p>x</p>"));
    }

    #[test]
    fn test_out_of_range_number_is_json() {
        assert_eq!(detect_body_syntax(r#"{"a":1e400}"#, None), SyntaxKind::Json);
        assert_eq!(detect_body_syntax("-1e-400", None), SyntaxKind::Json);
        assert!(parse_json("[123456789012345678901234567890]").is_ok());
    }

    #[test]
    fn test_deeply_nested_json_is_plain() {
        let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
        assert!(matches!(parse_json(&deep), Err(RenderError::Json(_))));
        assert_eq!(detect_body_syntax(&deep, None), SyntaxKind::Plain);
        assert_eq!(
            detect_body_syntax(&deep, Some("application/json")),
            SyntaxKind::Json
        );
    }
}
