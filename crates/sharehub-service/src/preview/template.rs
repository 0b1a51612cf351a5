//! `{token}` substitution for preview titles and descriptions.

use super::context::PreviewContext;

const OWNER_TOKEN: &str = "{owner_name}";
const SEPARATOR: char = '\u{00b7}';

/// Token table for one preview scenario.
#[derive(Debug, Clone)]
pub struct MagicVars<'a> {
    values: Vec<(&'static str, &'a str)>,
    owner_name: Option<&'a str>,
}

impl<'a> MagicVars<'a> {
    /// Tokens available to file previews.
    pub fn file(ctx: &'a PreviewContext) -> Self {
        Self {
            values: vec![
                ("site_name", ctx.site_name.as_str()),
                ("site_description", ctx.site_description.as_str()),
                ("site_url", ctx.site_url.as_str()),
                ("file_name", ctx.file_name.as_str()),
                ("file_size", ctx.file_size.as_str()),
                ("file_ext", ctx.file_ext.as_str()),
                ("owner_name", ctx.owner_name.as_str()),
                ("share_url", ctx.share_url.as_str()),
                ("share_id", ctx.share_id.as_str()),
            ],
            owner_name: Some(ctx.owner_name.as_str()),
        }
    }

    /// Tokens available to folder previews.
    pub fn folder(ctx: &'a PreviewContext) -> Self {
        Self {
            values: vec![
                ("site_name", ctx.site_name.as_str()),
                ("site_description", ctx.site_description.as_str()),
                ("site_url", ctx.site_url.as_str()),
                ("folder_name", ctx.folder_name.as_str()),
                ("owner_name", ctx.owner_name.as_str()),
                ("share_url", ctx.share_url.as_str()),
                ("share_id", ctx.share_id.as_str()),
            ],
            owner_name: Some(ctx.owner_name.as_str()),
        }
    }

    /// Tokens available to status previews (invalid, expired, locked).
    pub fn status(ctx: &'a PreviewContext) -> Self {
        Self {
            values: vec![
                ("site_name", ctx.site_name.as_str()),
                ("site_description", ctx.site_description.as_str()),
                ("site_url", ctx.site_url.as_str()),
                ("share_url", ctx.share_url.as_str()),
                ("share_id", ctx.share_id.as_str()),
                ("status", ctx.status.as_str()),
            ],
            owner_name: None,
        }
    }

    fn get(&self, name: &str) -> Option<&'a str> {
        self.values
            .iter()
            .find(|(token, _)| *token == name)
            .map(|(_, value)| *value)
    }
}

/// Substitute `{token}` occurrences in one left-to-right pass.
///
/// A token is `{`, one or more characters other than braces, and `}`.
/// Unknown tokens are kept verbatim and substituted values are never
/// rescanned. For file and folder tables, an empty owner name also removes
/// the separator left dangling around `{owner_name}`.
pub fn replace_magic_vars(template: &str, vars: &MagicVars<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find(['{', '}']) {
            Some(end) if end > 0 && after.as_bytes()[end] == b'}' => {
                let name = &after[..end];
                match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    match vars.owner_name {
        Some("") if template.contains(OWNER_TOKEN) => trim_owner_separator(&out),
        _ => out,
    }
}

fn trim_owner_separator(rendered: &str) -> String {
    let collapsed = collapse_separators(rendered.trim());
    collapsed
        .trim()
        .trim_matches(SEPARATOR)
        .trim()
        .to_string()
}

/// Replace every run of separators and whitespace holding at least two
/// separators with a single ` · `.
fn collapse_separators(text: &str) -> String {
    fn flush(run: &mut String, separators: &mut usize, out: &mut String) {
        if *separators >= 2 {
            out.push(' ');
            out.push(SEPARATOR);
            out.push(' ');
        } else {
            out.push_str(run);
        }
        run.clear();
        *separators = 0;
    }

    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    let mut separators = 0;

    for ch in text.chars() {
        if ch == SEPARATOR || ch.is_whitespace() {
            if ch == SEPARATOR {
                separators += 1;
            }
            run.push(ch);
        } else {
            flush(&mut run, &mut separators, &mut out);
            out.push(ch);
        }
    }
    flush(&mut run, &mut separators, &mut out);
    out
}
