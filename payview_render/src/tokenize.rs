//! Generic scan-and-stitch driver shared by the JSON and XML renderers

use crate::highlight::Highlighter;
use regex::Regex;

/// Render `text` by scanning it for tokens.
///
/// Text between tokens (and after the last one) goes through the search
/// overlay. Each token is handed to `render_token` together with the text
/// that follows it, so renderers can look ahead. With no tokens the output is
/// exactly the highlighted text.
pub fn render_tokenized<F>(
    text: &str,
    highlighter: &Highlighter,
    scanner: &Regex,
    mut render_token: F,
) -> String
where
    F: FnMut(&str, &str, &mut String),
{
    let mut out = String::with_capacity(text.len() * 2);
    let mut last = 0;

    for m in scanner.find_iter(text) {
        highlighter.push_segment(&text[last..m.start()], &mut out);
        render_token(m.as_str(), &text[m.end()..], &mut out);
        last = m.end();
    }
    highlighter.push_segment(&text[last..], &mut out);

    out
}

/// Append `<span class="...">` around the highlighted `text`
pub(crate) fn push_span(out: &mut String, class: &str, text: &str, highlighter: &Highlighter) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    highlighter.push_segment(text, out);
    out.push_str("</span>");
}
