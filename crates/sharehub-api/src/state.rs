//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::{Duration, Instant};

use sharehub_core::config::AppConfig;
use sharehub_service::{Collaborators, CrawlerClassifier, PreviewService, ShareInfoService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Collaborators ────────────────────────────────────────
    /// Share store, validator, permissions, id codec, entries, site settings
    pub collaborators: Collaborators,
    /// Link-unfurl crawler classifier
    pub crawlers: CrawlerClassifier,

    // ── Services ─────────────────────────────────────────────
    /// Open Graph preview service
    pub preview_service: Arc<PreviewService>,
    /// Share info and listing service
    pub info_service: Arc<ShareInfoService>,

    /// When the state was built
    pub started_at: Instant,
}

impl AppState {
    /// Wire the services around a collaborator bundle.
    pub fn new(config: AppConfig, collaborators: Collaborators) -> Self {
        let crawlers = CrawlerClassifier::new(&config.preview.crawler_agents);
        Self::with_crawlers(config, collaborators, crawlers)
    }

    /// Same as [`AppState::new`] with an explicit crawler classifier.
    pub fn with_crawlers(
        config: AppConfig,
        collaborators: Collaborators,
        crawlers: CrawlerClassifier,
    ) -> Self {
        let preview_service = Arc::new(PreviewService::new(collaborators.clone(), &config.preview));
        let info_service = Arc::new(ShareInfoService::new(
            collaborators.clone(),
            config.preview.long_url_route.clone(),
            Duration::from_millis(config.preview.lookup_timeout_ms),
        ));

        Self {
            config: Arc::new(config),
            collaborators,
            crawlers,
            preview_service,
            info_service,
            started_at: Instant::now(),
        }
    }
}
