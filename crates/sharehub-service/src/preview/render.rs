//! Open Graph preview document.

use std::fmt::Write as _;

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::context::PreviewContext;

/// Render the preview document for crawlers.
///
/// Attribute and text values are escaped by maud. The redirect target is
/// emitted as a JavaScript string literal that cannot close the script
/// element.
pub fn render_preview_html(ctx: &PreviewContext, title: &str, description: &str) -> Markup {
    let redirect_script = format!(
        "window.location.href = {};",
        js_string_literal(&ctx.redirect_url)
    );

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:image" content=(ctx.thumbnail_url);
                meta property="og:url" content=(ctx.share_url);
                meta property="og:type" content="website";
                meta property="og:site_name" content=(ctx.site_name);
                meta name="twitter:card" content="summary";
                meta name="twitter:title" content=(title);
                meta name="twitter:description" content=(description);
                meta name="twitter:image" content=(ctx.thumbnail_url);
                title { (title) " - " (ctx.site_name) }
            }
            body {
                script { (PreEscaped(redirect_script)) }
                noscript {
                    p { a href=(ctx.redirect_url) { (ctx.display_name) } }
                }
            }
        }
    }
}

/// Quote a value as a JavaScript string literal safe inside `<script>`.
fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' | '>' | '&' | '\'' | '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
