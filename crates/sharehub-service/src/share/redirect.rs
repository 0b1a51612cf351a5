//! Canonical share URLs.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::{Url, form_urlencoded};

use super::path::clean_share_path;
use super::uri::ShareUri;

/// Query key carrying the share address on the long-form route and the
/// sub-path on short links.
pub const PATH_KEY: &str = "path";

const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Ordered multi-valued query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMergeSet {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryMergeSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw (still encoded) query string.
    pub fn parse(raw: &str) -> Self {
        form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// First value of a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of a key.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a value to a key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Replace all values of a key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// Remove a key, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.values.remove(key)
    }

    /// Iterate keys in order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Whether the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize as `application/x-www-form-urlencoded`, keys sorted.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.values {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl FromIterator<(String, String)> for QueryMergeSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.append(key, value);
        }
        set
    }
}

/// Builds the long-form destination of a share and its public short URL.
#[derive(Debug, Clone)]
pub struct RedirectUrlBuilder {
    site_url: Url,
    long_url_route: String,
}

impl RedirectUrlBuilder {
    /// Creates a builder for a site base URL and the front-end share route.
    pub fn new(site_url: Url, long_url_route: impl Into<String>) -> Self {
        Self {
            site_url,
            long_url_route: long_url_route.into(),
        }
    }

    /// Build the absolute long-form URL of a share.
    ///
    /// The `path` parameter holds the share address, extended by the cleaned
    /// `sub_path`. Every other key of `extra` is appended after existing
    /// values; a caller-supplied `path` is always dropped.
    pub fn build(&self, id: &str, password: &str, sub_path: &str, extra: &QueryMergeSet) -> String {
        let address = ShareUri::new(id, password).join(sub_path).to_string();

        let mut query = QueryMergeSet::new();
        query.set(PATH_KEY, address);
        for (key, values) in extra.iter().filter(|(key, _)| *key != PATH_KEY) {
            for value in values {
                query.append(key, value.as_str());
            }
        }

        let mut url = self.with_path(&self.long_url_route);
        url.set_query(Some(&query.encode()));
        url.to_string()
    }

    /// Public short URL of a share, `{site}/s/{id}`, with `?path=` when a
    /// sub-path is given.
    pub fn share_url(&self, id: &str, sub_path: &str) -> String {
        let route = format!("s/{}", utf8_percent_encode(id, SEGMENT));
        let mut url = self.with_path(&route);

        let sub_path = clean_share_path(sub_path);
        if !sub_path.is_empty() {
            let mut query = QueryMergeSet::new();
            query.set(PATH_KEY, sub_path);
            url.set_query(Some(&query.encode()));
        }
        url.to_string()
    }

    fn with_path(&self, route: &str) -> Url {
        let mut url = self.site_url.clone();
        let base = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{base}/{}", route.trim_start_matches('/')));
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}
