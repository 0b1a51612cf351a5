//! Request DTOs (query strings).

use serde::Deserialize;

/// Query of `GET /api/shares/{id}/info`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShareInfoQuery {
    /// Share password, if the visitor has one.
    #[serde(default)]
    pub password: String,
    /// Whether to bump the view counter.
    #[serde(default)]
    pub count_views: bool,
}

/// Query of `GET /api/shares/{id}/preview`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SharePreviewQuery {
    /// Share password, if the visitor has one.
    #[serde(default)]
    pub password: String,
    /// Sub-path inside a folder share.
    #[serde(default)]
    pub path: String,
}
