//! JSON token rendering
//!
//! Operates on pretty-printed text produced from a successful parse, so the
//! scanner only ever sees well-formed JSON.

use crate::classify::parse_json;
use crate::error::RenderError;
use crate::highlight::Highlighter;
use crate::tokenize::{push_span, render_tokenized};
use once_cell::sync::Lazy;
use regex::Regex;

/// Strings, numbers, literals and structural characters
static JSON_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)"(?:\\.|[^"\\])*"|-?\d+(?:\.\d+)?(?:[eE][+\-]?\d+)?|\btrue\b|\bfalse\b|\bnull\b|[{}\[\]:,]"#,
    )
    .expect("JSON token pattern is valid")
});

/// Class of a JSON token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonToken {
    Key,
    String,
    Number,
    Boolean,
    Null,
    Punctuation,
}

impl JsonToken {
    /// Classify a token; `following` is the source text right after it
    pub fn classify(token: &str, following: &str) -> Self {
        if token.starts_with('"') {
            if following.trim_start().starts_with(':') {
                JsonToken::Key
            } else {
                JsonToken::String
            }
        } else if token == "true" || token == "false" {
            JsonToken::Boolean
        } else if token == "null" {
            JsonToken::Null
        } else if matches!(token, "{" | "}" | "[" | "]" | ":" | ",") {
            JsonToken::Punctuation
        } else {
            JsonToken::Number
        }
    }

    /// CSS class emitted for this token
    pub fn css_class(&self) -> &'static str {
        match self {
            JsonToken::Key => "json-key",
            JsonToken::String => "json-string",
            JsonToken::Number => "json-number",
            JsonToken::Boolean => "json-boolean",
            JsonToken::Null => "json-null",
            JsonToken::Punctuation => "json-punctuation",
        }
    }
}

/// Re-serialize a JSON body with 2-space indentation
pub fn pretty_json(body: &str) -> Result<String, RenderError> {
    let value = parse_json(body)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render JSON text as class-tagged spans
pub fn render_json(text: &str, highlighter: &Highlighter) -> String {
    render_tokenized(text, highlighter, &JSON_TOKEN_RE, |token, following, out| {
        let class = JsonToken::classify(token, following).css_class();
        push_span(out, class, token, highlighter);
    })
}
