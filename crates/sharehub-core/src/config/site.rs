//! Site identity configuration.

use serde::{Deserialize, Serialize};

/// Public identity of the deployment, used in previews and canonical URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name shown in previews.
    #[serde(default = "default_name")]
    pub name: String,
    /// Short site description.
    #[serde(default)]
    pub description: String,
    /// Canonical base URL (scheme + host, optional path prefix).
    #[serde(default = "default_url")]
    pub url: String,
    /// Large PWA icon (absolute URL or site-relative path).
    #[serde(default)]
    pub large_icon: String,
    /// Medium PWA icon, used when no large icon is configured.
    #[serde(default)]
    pub medium_icon: String,
    /// Whether anonymous visitors may open share links.
    #[serde(default = "default_true")]
    pub anonymous_share_download: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: String::new(),
            url: default_url(),
            large_icon: String::new(),
            medium_icon: String::new(),
            anonymous_share_download: true,
        }
    }
}

fn default_name() -> String {
    "ShareHub".to_string()
}

fn default_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_true() -> bool {
    true
}
