//! Share preview and redirect configuration.

use serde::{Deserialize, Serialize};

/// Crawler identifiers recognised when no list is configured.
pub const DEFAULT_CRAWLER_AGENTS: &[&str] = &[
    "facebookexternalhit",
    "facebookcatalog",
    "facebot",
    "twitterbot",
    "linkedinbot",
    "discordbot",
    "telegrambot",
    "slackbot",
    "whatsapp",
];

/// Preview rendering and share resolution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Front-end route that opens a share address (`?path=sharehub://...`).
    #[serde(default = "default_long_url_route")]
    pub long_url_route: String,
    /// Upper bound for each collaborator lookup, in milliseconds.
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_ms: u64,
    /// Case-insensitive user-agent substrings identifying link-unfurl crawlers.
    #[serde(default = "default_crawler_agents")]
    pub crawler_agents: Vec<String>,
    /// Longest share id or password accepted from a `/home` share address.
    #[serde(default = "default_max_param_length")]
    pub max_param_length: usize,
    /// Title and description templates per scenario.
    #[serde(default)]
    pub templates: PreviewTemplates,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            long_url_route: default_long_url_route(),
            lookup_timeout_ms: default_lookup_timeout(),
            crawler_agents: default_crawler_agents(),
            max_param_length: default_max_param_length(),
            templates: PreviewTemplates::default(),
        }
    }
}

/// A title/description template pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePair {
    /// Title template.
    pub title: String,
    /// Description template.
    pub description: String,
}

impl TemplatePair {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Templates for the three preview scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewTemplates {
    /// File shares.
    #[serde(default = "default_file_templates")]
    pub file: TemplatePair,
    /// Folder shares.
    #[serde(default = "default_folder_templates")]
    pub folder: TemplatePair,
    /// Invalid, expired, locked, or login-required shares.
    #[serde(default = "default_status_templates")]
    pub status: TemplatePair,
}

impl Default for PreviewTemplates {
    fn default() -> Self {
        Self {
            file: default_file_templates(),
            folder: default_folder_templates(),
            status: default_status_templates(),
        }
    }
}

fn default_long_url_route() -> String {
    "/home".to_string()
}

fn default_lookup_timeout() -> u64 {
    5000
}

fn default_crawler_agents() -> Vec<String> {
    DEFAULT_CRAWLER_AGENTS
        .iter()
        .map(|agent| agent.to_string())
        .collect()
}

fn default_max_param_length() -> usize {
    32
}

fn default_file_templates() -> TemplatePair {
    TemplatePair::new("{file_name}", "{file_size} · {owner_name}")
}

fn default_folder_templates() -> TemplatePair {
    TemplatePair::new("{folder_name}", "Folder · {owner_name}")
}

fn default_status_templates() -> TemplatePair {
    TemplatePair::new("{site_name}", "{status}")
}
