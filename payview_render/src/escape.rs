//! HTML escaping for payload text

/// Escape the five HTML-reserved characters.
///
/// Each character is replaced exactly once, so entities produced here are
/// never re-escaped.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

/// Append the escaped form of `text` to `out`
pub(crate) fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_reserved_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_existing_entities_are_escaped_once() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("&amp;amp;"), "&amp;amp;amp;");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("plain text ✓ 日本"), "plain text ✓ 日本");
    }
}
