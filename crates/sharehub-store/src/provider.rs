//! Assembles the collaborator bundle from configuration.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use sharehub_core::config::AppConfig;
use sharehub_core::result::AppResult;
use sharehub_service::{Collaborators, IdCodec, SiteSettings};

use crate::codec::SaltedIdCodec;
use crate::memory::{MemoryEntryResolver, MemoryShareStore};
use crate::seed::SeedData;
use crate::site::{StaticPermissionGate, StaticSiteSettings};
use crate::validator::ExpiryValidator;

/// Build the in-memory collaborators.
///
/// Loads `store.seed_file` when set and checks that `site.url` is usable,
/// so misconfiguration fails at startup rather than per request.
pub fn build_collaborators(config: &AppConfig) -> AppResult<Collaborators> {
    let seed = if config.store.seed_file.is_empty() {
        info!("No seed file configured, starting with an empty share store");
        SeedData::default()
    } else {
        SeedData::load(Path::new(&config.store.seed_file))?
    };
    collaborators_from_seed(config, seed)
}

/// Build the in-memory collaborators around already loaded seed data.
pub fn collaborators_from_seed(config: &AppConfig, seed: SeedData) -> AppResult<Collaborators> {
    let site = StaticSiteSettings::new(config.site.clone());
    site.site_url()?;

    let ids: Arc<dyn IdCodec> = Arc::new(SaltedIdCodec::new(&config.store.id_salt));
    let shares = MemoryShareStore::with_shares(ids.clone(), seed.into_shares()?);
    info!(shares = shares.len(), "Initialized in-memory share store");

    Ok(Collaborators {
        shares: Arc::new(shares.clone()),
        validator: Arc::new(ExpiryValidator),
        permissions: Arc::new(StaticPermissionGate::new(
            config.site.anonymous_share_download,
        )),
        ids,
        entries: Arc::new(MemoryEntryResolver::new(shares)),
        site: Arc::new(site),
    })
}
