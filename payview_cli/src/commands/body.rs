//! Body commands (render, detect, format, highlight)

use super::read_input;
use crate::config::Config;
use crate::page::standalone_document;
use anyhow::Result;
use payview_render::{
    detect_body_syntax, format_body_for_display, highlight_text, render_payload_html,
};
use std::path::PathBuf;

/// Options shared by the body commands
#[derive(Debug, Clone, Default)]
pub struct BodyOptions {
    pub file: Option<PathBuf>,
    pub content_type: Option<String>,
    pub search: Option<String>,
    pub standalone: bool,
}

/// Render a body as highlighted markup
pub fn render(opts: BodyOptions, config: &Config) -> Result<()> {
    let body = read_input(opts.file.as_deref())?;
    let content_type = config.content_type(opts.content_type);
    let term = config.search_term(opts.search);

    let syntax = detect_body_syntax(&body, content_type.as_deref());
    tracing::info!(%syntax, bytes = body.len(), "Rendering body");

    let markup = render_payload_html(&body, &term, content_type.as_deref());
    if config.standalone(opts.standalone) {
        let title = opts
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string());
        print!("{}", standalone_document(&title, &format!("<pre>{}</pre>", markup)));
    } else {
        println!("{}", markup);
    }

    Ok(())
}

/// Print the detected syntax of a body
pub fn detect(opts: BodyOptions, config: &Config) -> Result<()> {
    let body = read_input(opts.file.as_deref())?;
    let content_type = config.content_type(opts.content_type);
    println!("{}", detect_body_syntax(&body, content_type.as_deref()));
    Ok(())
}

/// Print a body as it would be displayed (pretty JSON, verbatim otherwise)
pub fn format(opts: BodyOptions, config: &Config) -> Result<()> {
    let body = read_input(opts.file.as_deref())?;
    let content_type = config.content_type(opts.content_type);
    let syntax = detect_body_syntax(&body, content_type.as_deref());
    println!("{}", format_body_for_display(&body, syntax));
    Ok(())
}

/// Highlight a single value without syntax colouring
pub fn highlight(text: &str, search: Option<String>, config: &Config) -> Result<()> {
    println!("{}", highlight_text(text, &config.search_term(search)));
    Ok(())
}
