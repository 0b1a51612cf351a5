//! Site settings and anonymous permissions read from configuration.

use async_trait::async_trait;
use url::Url;

use sharehub_core::config::SiteConfig;
use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;
use sharehub_entity::permission::{Capability, PermissionSet};
use sharehub_service::{PermissionGate, PwaIcons, SiteBasic, SiteSettings};

/// Site settings fixed at startup.
#[derive(Debug, Clone)]
pub struct StaticSiteSettings {
    config: SiteConfig,
}

impl StaticSiteSettings {
    /// Create settings from the `[site]` section.
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }
}

impl SiteSettings for StaticSiteSettings {
    fn site_basic(&self) -> SiteBasic {
        SiteBasic {
            name: self.config.name.clone(),
            description: self.config.description.clone(),
        }
    }

    fn site_url(&self) -> AppResult<Url> {
        let url = Url::parse(&self.config.url).map_err(|e| {
            AppError::configuration(format!("Invalid site url '{}': {e}", self.config.url))
        })?;
        if url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "Site url '{}' cannot be used as a base",
                self.config.url
            )));
        }
        Ok(url)
    }

    fn pwa(&self) -> PwaIcons {
        PwaIcons {
            large_icon: self.config.large_icon.clone(),
            medium_icon: self.config.medium_icon.clone(),
        }
    }
}

/// Anonymous group permissions fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermissionGate {
    anonymous_share_download: bool,
}

impl StaticPermissionGate {
    /// Create a gate that does or does not let anonymous visitors open shares.
    pub fn new(anonymous_share_download: bool) -> Self {
        Self {
            anonymous_share_download,
        }
    }
}

#[async_trait]
impl PermissionGate for StaticPermissionGate {
    async fn anonymous_permissions(&self) -> AppResult<PermissionSet> {
        let capabilities = self
            .anonymous_share_download
            .then_some(Capability::ShareDownload);
        Ok(PermissionSet::new(capabilities))
    }
}
