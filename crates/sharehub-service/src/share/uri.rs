//! Share addresses and the tolerant parser used for crawler-supplied input.
//!
//! A share address looks like `sharehub://{id}[:{password}]@{filesystem}/{path}`.
//! [`ShareUri::parse`] is strict; [`parse_share_uri`] wraps it with a repair
//! chain for addresses that were double-encoded or carry stray `%` signs.

use std::borrow::Cow;
use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use url::Url;

use sharehub_core::error::{AppError, ErrorKind};
use sharehub_core::result::AppResult;

use super::path::clean_share_path;

/// Scheme of share addresses.
pub const SHARE_SCHEME: &str = "sharehub";

/// File-system family addressing shared content.
pub const SHARE_FILESYSTEM: &str = "share";

const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const USERINFO: &AsciiSet = &PATH
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// A parsed share address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareUri {
    id: String,
    password: String,
    filesystem: String,
    path: String,
}

impl ShareUri {
    /// Address of the root of a share.
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
            filesystem: SHARE_FILESYSTEM.to_string(),
            path: String::new(),
        }
    }

    /// Strictly parse a share address.
    ///
    /// Fails with `Malformed` when the scheme is not `sharehub`, when any `%`
    /// does not start a valid `%XX` escape, or when the value is not a URL
    /// with an authority.
    pub fn parse(raw: &str) -> AppResult<Self> {
        if has_invalid_escape(raw) {
            return Err(AppError::malformed("Share address contains an invalid percent escape"));
        }

        let url = Url::parse(raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Malformed,
                "Share address is not a valid URL",
                e,
            )
        })?;

        if url.scheme() != SHARE_SCHEME {
            return Err(AppError::malformed(format!(
                "Unsupported share address scheme '{}'",
                url.scheme()
            )));
        }

        let filesystem = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| AppError::malformed("Share address has no file system"))?
            .to_ascii_lowercase();

        let id = decode_component(url.username())?;
        let password = decode_component(url.password().unwrap_or(""))?;
        let path = decode_component(url.path())?;

        Ok(Self {
            id,
            password,
            filesystem,
            path: clean_share_path(&path),
        })
    }

    /// Share id (the public, encoded form).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Password carried in the address, empty when absent.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// File-system family (`share` for share addresses).
    pub fn filesystem(&self) -> &str {
        &self.filesystem
    }

    /// Path below the share root, without leading separator.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Non-empty path segments below the share root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }

    /// Append a relative path, cleaning the result.
    pub fn join(&self, sub_path: &str) -> Self {
        let joined = if self.path.is_empty() {
            clean_share_path(sub_path)
        } else {
            clean_share_path(&format!("{}/{}", self.path, sub_path))
        };
        Self {
            path: joined,
            ..self.clone()
        }
    }
}

impl fmt::Display for ShareUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SHARE_SCHEME}://{}", utf8_percent_encode(&self.id, USERINFO))?;
        if !self.password.is_empty() {
            write!(f, ":{}", utf8_percent_encode(&self.password, USERINFO))?;
        }
        write!(f, "@{}", self.filesystem)?;
        if !self.path.is_empty() {
            write!(f, "/{}", utf8_percent_encode(&self.path, PATH))?;
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> AppResult<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Malformed,
                "Share address is not valid UTF-8",
                e,
            )
        })
}

fn is_valid_escape(bytes: &[u8], at: usize) -> bool {
    at + 2 < bytes.len()
        && bytes[at + 1].is_ascii_hexdigit()
        && bytes[at + 2].is_ascii_hexdigit()
}

fn has_invalid_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'%' && !is_valid_escape(bytes, i))
}

/// Replace every `%` that does not start a valid `%XX` escape with `%25`.
///
/// Valid escapes are kept verbatim. Input without `%` is returned unchanged.
pub fn sanitize_percent_escapes(raw: &str) -> Cow<'_, str> {
    if !raw.contains('%') {
        return Cow::Borrowed(raw);
    }

    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len() + 8);
    let mut last = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'%' && !is_valid_escape(bytes, i) {
            out.push_str(&raw[last..i]);
            out.push_str("%25");
            last = i + 1;
        }
    }
    if last == 0 {
        return Cow::Borrowed(raw);
    }
    out.push_str(&raw[last..]);
    Cow::Owned(out)
}

/// Decode a value once the way query strings are decoded (`+` is a space).
///
/// Returns `None` when the value contains an invalid escape or does not
/// decode to UTF-8.
fn query_unescape(raw: &str) -> Option<String> {
    if has_invalid_escape(raw) {
        return None;
    }
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

fn parse_or_sanitize(raw: &str) -> Option<ShareUri> {
    if let Ok(uri) = ShareUri::parse(raw) {
        return Some(uri);
    }
    match sanitize_percent_escapes(raw) {
        Cow::Owned(sanitized) => ShareUri::parse(&sanitized).ok(),
        Cow::Borrowed(_) => None,
    }
}

/// Parse a share address supplied by an untrusted client.
///
/// Tries the value as-is, then with stray `%` signs repaired, then (when the
/// value contains `%` at all) after one round of query-style decoding, again
/// repairing stray `%` signs. Only addresses of the `share` file system are
/// returned. Never fails loudly; unusable input yields `None`.
pub fn parse_share_uri(raw: &str) -> Option<ShareUri> {
    if raw.is_empty() {
        return None;
    }

    let parsed = parse_or_sanitize(raw).or_else(|| {
        if !raw.contains('%') {
            return None;
        }
        query_unescape(raw).and_then(|decoded| parse_or_sanitize(&decoded))
    });

    parsed.filter(|uri| uri.filesystem() == SHARE_FILESYSTEM)
}
