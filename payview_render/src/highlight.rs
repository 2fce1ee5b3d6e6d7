//! Search overlay: case-insensitive literal matching wrapped in `<mark>`
//!
//! Matching runs over the raw text and every part is escaped afterwards, so a
//! term can never match inside an entity produced by escaping (searching for
//! `amp` does not light up `&amp;`).

use crate::error::RenderError;
use crate::escape::{escape_html, escape_into};
use regex::{Regex, RegexBuilder};

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// A compiled search term, reused for every segment of one render call
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    /// `None` when the trimmed term is empty
    matcher: Option<Regex>,
}

impl Highlighter {
    /// Compile `term` into a literal, case-insensitive matcher
    pub fn new(term: &str) -> Result<Self, RenderError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Self::default());
        }

        let matcher = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            matcher: Some(matcher),
        })
    }

    /// Like [`Highlighter::new`], but a term that cannot be compiled
    /// disables highlighting instead of failing
    pub fn for_term(term: &str) -> Self {
        Self::new(term).unwrap_or_else(|e| {
            tracing::debug!("Search highlighting disabled: {}", e);
            Self::default()
        })
    }

    /// Whether a non-empty term is active
    pub fn is_active(&self) -> bool {
        self.matcher.is_some()
    }

    /// Append the escaped, marked-up form of `text` to `out`
    pub fn push_segment(&self, text: &str, out: &mut String) {
        let Some(matcher) = &self.matcher else {
            escape_into(text, out);
            return;
        };

        let mut last = 0;
        for m in matcher.find_iter(text) {
            escape_into(&text[last..m.start()], out);
            out.push_str(MARK_OPEN);
            escape_into(m.as_str(), out);
            out.push_str(MARK_CLOSE);
            last = m.end();
        }
        escape_into(&text[last..], out);
    }

    /// Escaped, marked-up form of `text`
    pub fn segment(&self, text: &str) -> String {
        if self.matcher.is_none() {
            return escape_html(text);
        }
        let mut out = String::with_capacity(text.len() + 16);
        self.push_segment(text, &mut out);
        out
    }
}

/// Escape `text` and wrap every case-insensitive occurrence of the trimmed
/// `term` in `<mark>`
pub fn highlight_segment(text: &str, term: &str) -> String {
    Highlighter::for_term(term).segment(text)
}
