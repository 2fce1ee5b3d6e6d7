//! Render a logged request/response pair as an HTML detail view

use super::read_input;
use crate::config::Config;
use crate::page::standalone_document;
use anyhow::{Context, Result};
use http::StatusCode;
use payview_render::log::{format_timestamp, normalize_method};
use payview_render::{highlight_text, render_payload_html, HeaderEntry, RequestLog};
use std::path::Path;

/// Print the detail view for a log record stored as JSON
pub fn run(
    file: Option<&Path>,
    search: Option<String>,
    standalone: bool,
    config: &Config,
) -> Result<()> {
    let input = read_input(file)?;
    let log = RequestLog::from_json(&input).context("Failed to parse request log")?;
    let term = config.search_term(search);

    tracing::info!(id = %log.id, status = log.status, "Rendering request log");

    let detail = render_log_detail(&log, &term);
    if config.standalone(standalone) {
        let title = format!("{} {}", normalize_method(&log.method), log.url);
        print!("{}", standalone_document(&title, &detail));
    } else {
        println!("{}", detail);
    }

    Ok(())
}

/// Canonical reason phrase for a status code, if it has one
fn reason_phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}

/// Build the detail fragment: summary line, then request and response
pub fn render_log_detail(log: &RequestLog, term: &str) -> String {
    let mut out = String::new();
    let status_class = log.status_class();

    out.push_str("<section class=\"log-detail\">\n<div class=\"log-summary\">");
    out.push_str(&format!(
        "<span class=\"method\">{}</span> <span class=\"url\">{}</span> ",
        highlight_text(&normalize_method(&log.method), term),
        highlight_text(&log.url, term),
    ));
    let status_text = format!("{} {}", log.status, reason_phrase(log.status));
    out.push_str(&format!(
        "<span class=\"status status-{}\">{}</span> <time>{}</time>",
        status_class.as_str(),
        highlight_text(status_text.trim_end(), term),
        format_timestamp(log.time),
    ));
    if !log.proxy_url.is_empty() {
        out.push_str(&format!(
            " <span class=\"url proxy-url\">via {}</span>",
            highlight_text(&log.proxy_url, term)
        ));
    }
    out.push_str("</div>\n");

    push_exchange_section(
        &mut out,
        "Request",
        &log.request_header_entries(),
        &log.request_body,
        log.request_content_type().as_deref(),
        term,
    );
    push_exchange_section(
        &mut out,
        "Response",
        &log.response_header_entries(),
        &log.response_body,
        log.response_content_type().as_deref(),
        term,
    );

    out.push_str("</section>");
    out
}

fn push_exchange_section(
    out: &mut String,
    title: &str,
    headers: &[HeaderEntry],
    body: &str,
    content_type: Option<&str>,
    term: &str,
) {
    out.push_str(&format!("<div class=\"log-section\">\n<h3>{}</h3>\n", title));

    out.push_str("<table class=\"headers\"><tbody>");
    for entry in headers {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            highlight_text(&entry.key, term),
            highlight_text(&entry.value, term),
        ));
    }
    out.push_str("</tbody></table>\n");

    let rendered = render_payload_html(body, term, content_type);
    if rendered.is_empty() {
        out.push_str("<div class=\"body-content\"><pre class=\"empty\">(empty)</pre></div>\n");
    } else {
        out.push_str(&format!("<div class=\"body-content\"><pre>{}</pre></div>\n", rendered));
    }

    out.push_str("</div>\n");
}
