//! HTML Views
//!
//! Server-rendered pages for every form and listing. Pages are plain
//! strings wrapped in [`axum::response::Html`]; every user-supplied value
//! goes through [`escape_html`] before it is interpolated.

/// Page renderers
pub mod pages;

pub use pages::{home_page, login_page, register_page, register_post_page};

/// Escape text for safe interpolation into HTML element content and attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Wrap page content in the shared document skeleton
pub(crate) fn layout(title: &str, nav: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav>{nav}</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        nav = nav,
        body = body,
    )
}
