//! Standalone HTML document wrapper and default stylesheet

use payview_render::escape_html;

/// Colours for every class the renderer emits
pub const STYLESHEET: &str = r#"
        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #fafafa;
            color: #333;
            font-size: 14px;
            margin: 1rem;
        }
        pre, .body-content {
            background: #f8f8f8;
            border: 1px solid #e0e0e0;
            border-radius: 4px;
            padding: 0.75rem;
            overflow-x: auto;
            white-space: pre-wrap;
            word-break: break-all;
            font-family: 'Monaco', 'Menlo', 'Consolas', monospace;
            font-size: 0.8rem;
            line-height: 1.5;
        }
        .body-content pre { border: none; padding: 0; margin: 0; }
        table.headers { border-collapse: collapse; width: 100%; margin-bottom: 0.75rem; }
        table.headers td { padding: 0.25rem 0.5rem; border-bottom: 1px solid #eee; font-family: monospace; font-size: 0.8rem; }
        table.headers td:first-child { color: #666; white-space: nowrap; }
        .log-summary { display: flex; gap: 0.75rem; align-items: baseline; margin-bottom: 1rem; }
        .method { font-weight: 600; }
        .url { font-family: monospace; }
        .empty { color: #999; font-style: italic; }

        /* Search */
        mark { background: #fde68a; color: inherit; border-radius: 2px; }

        /* Status */
        .status-2xx { color: #166534; }
        .status-3xx { color: #92400e; }
        .status-4xx { color: #c2410c; }
        .status-5xx { color: #991b1b; }
        .status-unknown { color: #52525b; }

        /* JSON highlighting */
        .json-key { color: #881391; }
        .json-string { color: #c41a16; }
        .json-number { color: #1c00cf; }
        .json-boolean { color: #0d22aa; }
        .json-null { color: #808080; }
        .json-punctuation { color: #555; }

        /* XML highlighting */
        .xml-bracket { color: #881280; }
        .xml-tag { color: #881280; font-weight: 600; }
        .xml-attr-name { color: #994500; }
        .xml-attr-value { color: #1a1aa6; }
        .xml-comment { color: #236e25; font-style: italic; }
        .xml-prolog { color: #808080; }
"#;

/// Wrap rendered markup in a complete HTML document
pub fn standalone_document(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
    <style>{}    </style>
</head>
<body>
{}
</body>
</html>
"#,
        escape_html(title),
        STYLESHEET,
        content
    )
}
