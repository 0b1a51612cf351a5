//! Link-unfurl crawler detection.

use std::sync::Arc;

use sharehub_core::config::preview::DEFAULT_CRAWLER_AGENTS;

/// Recognises social-media crawlers by user agent.
///
/// The identifier list is lowercased once at construction and shared
/// read-only between requests.
#[derive(Debug, Clone)]
pub struct CrawlerClassifier {
    agents: Arc<[String]>,
}

impl CrawlerClassifier {
    /// Build a classifier from a list of user-agent substrings.
    pub fn new<I, S>(agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let agents: Vec<String> = agents
            .into_iter()
            .map(|a| a.as_ref().trim().to_ascii_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        Self {
            agents: agents.into(),
        }
    }

    /// Returns true when the user agent contains a known crawler identifier,
    /// ignoring case.
    pub fn is_known_crawler(&self, user_agent: &str) -> bool {
        if user_agent.is_empty() {
            return false;
        }
        let ua = user_agent.to_ascii_lowercase();
        self.agents.iter().any(|agent| ua.contains(agent.as_str()))
    }
}

impl Default for CrawlerClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CRAWLER_AGENTS)
    }
}
