//! XML node scanning and token rendering
//!
//! Bodies render in their original layout; nothing is re-indented.

use crate::highlight::Highlighter;
use crate::tokenize::{push_span, render_tokenized};
use once_cell::sync::Lazy;
use regex::Regex;

/// Comments, processing instructions, DOCTYPE declarations and element tags
pub(crate) static XML_NODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?s)<!--.*?-->",
        r"|<\?.*?\?>",
        r"|(?i:<!DOCTYPE)[^>\[]*(?:\[.*?\])?\s*>",
        r"|</?[A-Za-z_][\w:.\-]*(?:\s[^<>]*?)?/?>",
    ))
    .expect("XML node pattern is valid")
});

/// Element tag split into bracket / name / attributes / bracket
static XML_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A(</?)([A-Za-z_][\w:.\-]*)(.*?)(/?>)\z").expect("XML tag pattern is valid")
});

/// `name` or `name=value` inside a tag's attribute region
static XML_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s=]+)(?:(\s*=\s*)("[^"]*"|'[^']*'|[^\s"']+))?"#)
        .expect("XML attribute pattern is valid")
});

/// Structural role of a scanned node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum XmlNode<'a> {
    Comment,
    /// Processing instruction or DOCTYPE
    Prolog,
    Open { name: &'a str },
    Close { name: &'a str },
    SelfClosing { name: &'a str },
}

impl<'a> XmlNode<'a> {
    /// Classify a node matched by [`XML_NODE_RE`]
    pub(crate) fn parse(token: &'a str) -> Option<Self> {
        if token.starts_with("<!--") {
            return Some(XmlNode::Comment);
        }
        if token.starts_with("<?") || token.starts_with("<!") {
            return Some(XmlNode::Prolog);
        }

        let caps = XML_TAG_RE.captures(token)?;
        let name = caps.get(2)?.as_str();
        let node = if caps.get(1)?.as_str() == "</" {
            XmlNode::Close { name }
        } else if caps.get(4)?.as_str() == "/>" {
            XmlNode::SelfClosing { name }
        } else {
            XmlNode::Open { name }
        };
        Some(node)
    }
}

/// Class of an XML token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlToken {
    Bracket,
    TagName,
    AttributeName,
    AttributeValue,
    Comment,
    Prolog,
}

impl XmlToken {
    /// CSS class emitted for this token
    pub fn css_class(&self) -> &'static str {
        match self {
            XmlToken::Bracket => "xml-bracket",
            XmlToken::TagName => "xml-tag",
            XmlToken::AttributeName => "xml-attr-name",
            XmlToken::AttributeValue => "xml-attr-value",
            XmlToken::Comment => "xml-comment",
            XmlToken::Prolog => "xml-prolog",
        }
    }
}

/// Render XML text as class-tagged spans
pub fn render_xml(text: &str, highlighter: &Highlighter) -> String {
    render_tokenized(text, highlighter, &XML_NODE_RE, |token, _, out| {
        render_node(token, highlighter, out)
    })
}

fn render_node(token: &str, highlighter: &Highlighter, out: &mut String) {
    if token.starts_with("<!--") {
        push_span(out, XmlToken::Comment.css_class(), token, highlighter);
        return;
    }
    if token.starts_with("<?") || token.starts_with("<!") {
        push_span(out, XmlToken::Prolog.css_class(), token, highlighter);
        return;
    }

    let Some(caps) = XML_TAG_RE.captures(token) else {
        tracing::debug!(%token, "Tag did not decompose, rendering as text");
        highlighter.push_segment(token, out);
        return;
    };

    let bracket = XmlToken::Bracket.css_class();
    push_span(out, bracket, &caps[1], highlighter);
    push_span(out, XmlToken::TagName.css_class(), &caps[2], highlighter);
    render_attributes(&caps[3], highlighter, out);
    push_span(out, bracket, &caps[4], highlighter);
}

fn render_attributes(attrs: &str, highlighter: &Highlighter, out: &mut String) {
    let mut last = 0;

    for caps in XML_ATTR_RE.captures_iter(attrs) {
        let Some(whole) = caps.get(0) else { continue };
        highlighter.push_segment(&attrs[last..whole.start()], out);
        last = whole.end();

        push_span(out, XmlToken::AttributeName.css_class(), &caps[1], highlighter);
        if let (Some(assign), Some(value)) = (caps.get(2), caps.get(3)) {
            highlighter.push_segment(assign.as_str(), out);
            push_span(out, XmlToken::AttributeValue.css_class(), value.as_str(), highlighter);
        }
    }

    highlighter.push_segment(&attrs[last..], out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Highlighter {
        Highlighter::default()
    }

    #[test]
    fn test_node_parse() {
        assert_eq!(XmlNode::parse("<!-- c -->"), Some(XmlNode::Comment));
        assert_eq!(XmlNode::parse("<?xml version=\"1.0\"?>"), Some(XmlNode::Prolog));
        assert_eq!(XmlNode::parse("<!DOCTYPE html>"), Some(XmlNode::Prolog));
        assert_eq!(XmlNode::parse("<a>"), Some(XmlNode::Open { name: "a" }));
        assert_eq!(XmlNode::parse("<a href='x'>"), Some(XmlNode::Open { name: "a" }));
        assert_eq!(XmlNode::parse("</ns:a>"), Some(XmlNode::Close { name: "ns:a" }));
        assert_eq!(XmlNode::parse("<br/>"), Some(XmlNode::SelfClosing { name: "br" }));
        assert_eq!(XmlNode::parse("<br />"), Some(XmlNode::SelfClosing { name: "br" }));
    }

    #[test]
    fn test_scanner_finds_all_node_kinds() {
        let text = r#"<?xml version="1.0"?><!DOCTYPE r [<!ENTITY e "x">]><!-- <c> --><r a="1"><e/></r>"#;
        let nodes: Vec<&str> = XML_NODE_RE.find_iter(text).map(|m| m.as_str()).collect();
        assert_eq!(
            nodes,
            vec![
                r#"<?xml version="1.0"?>"#,
                r#"<!DOCTYPE r [<!ENTITY e "x">]>"#,
                "<!-- <c> -->",
                r#"<r a="1">"#,
                "<e/>",
                "</r>",
            ]
        );
    }

    #[test]
    fn test_render_element() {
        let html = render_xml("<a>1</a>", &plain());
        assert_eq!(
            html,
            concat!(
                r#"<span class="xml-bracket">&lt;</span><span class="xml-tag">a</span><span class="xml-bracket">&gt;</span>"#,
                "1",
                r#"<span class="xml-bracket">&lt;/</span><span class="xml-tag">a</span><span class="xml-bracket">&gt;</span>"#,
            )
        );
    }

    #[test]
    fn test_render_self_closing() {
        let html = render_xml("<br />", &plain());
        assert_eq!(
            html,
            concat!(
                r#"<span class="xml-bracket">&lt;</span><span class="xml-tag">br</span> "#,
                r#"<span class="xml-bracket">/&gt;</span>"#,
            )
        );
    }

    #[test]
    fn test_render_attributes() {
        let html = render_xml(r#"<item id = "7" lang='en' checked>"#, &plain());
        assert!(html.contains(r#"<span class="xml-attr-name">id</span> = <span class="xml-attr-value">&quot;7&quot;</span>"#));
        assert!(html.contains(r#"<span class="xml-attr-name">lang</span>=<span class="xml-attr-value">&#39;en&#39;</span>"#));
        assert!(html.contains(r#" <span class="xml-attr-name">checked</span><span class="xml-bracket">&gt;</span>"#));
    }

    #[test]
    fn test_bare_attribute_value() {
        let html = render_xml("<input size=10>", &plain());
        assert!(html.contains(r#"<span class="xml-attr-name">size</span>=<span class="xml-attr-value">10</span>"#));
    }

    #[test]
    fn test_comment_and_prolog_wrapped_whole() {
        let html = render_xml("<?xml version=\"1.0\"?>\n<!-- <hidden> -->", &plain());
        assert_eq!(
            html,
            concat!(
                r#"<span class="xml-prolog">&lt;?xml version=&quot;1.0&quot;?&gt;</span>"#,
                "\n",
                r#"<span class="xml-comment">&lt;!-- &lt;hidden&gt; --&gt;</span>"#,
            )
        );
    }

    #[test]
    fn test_search_in_text_and_tags() {
        let html = render_xml(r#"<user role="admin">Admin</user>"#, &Highlighter::for_term("admin"));
        assert!(html.contains(r#"<span class="xml-attr-value">&quot;<mark>admin</mark>&quot;</span>"#));
        assert!(html.contains("&gt;</span><mark>Admin</mark><span"));
    }

    #[test]
    fn test_layout_is_preserved() {
        let html = render_xml("<a>\n    <b>x</b>\n</a>", &plain());
        assert!(html.contains("</span>\n    <span"));
        assert!(html.contains("</span>\n<span"));
    }
}
