//! Share metadata for the public info endpoint and profile listings.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use sharehub_core::error::{AppError, ErrorKind};
use sharehub_core::result::AppResult;
use sharehub_core::types::{ShareId, UserId};
use sharehub_entity::entry::EntryKind;
use sharehub_entity::share::ShareRecord;

use super::bounded;
use super::path::ResolvedEntry;
use super::redirect::RedirectUrlBuilder;
use super::status::{ShareLoad, ShareStatusResolver};
use super::uri::ShareUri;
use crate::collaborators::{Collaborators, IdKind};
use crate::context::Viewer;

/// Public view of a share.
#[derive(Debug, Clone, Serialize)]
pub struct ShareInfo {
    /// Public share id.
    pub id: String,
    /// Display name of the shared entry.
    pub name: String,
    /// Kind of the shared entry.
    pub kind: Option<EntryKind>,
    /// Owner nickname.
    pub owner: Option<String>,
    /// Whether the share requires a password.
    pub locked: bool,
    /// Whether the viewer may see the share content.
    pub unlocked: bool,
    /// Whether the share is no longer valid.
    pub expired: bool,
    /// When the share was created.
    pub created_at: DateTime<Utc>,
    /// When the share expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// View counter.
    pub views: i64,
    /// Download counter.
    pub downloads: i64,
    /// Downloads left, if limited.
    pub remaining_downloads: Option<i64>,
    /// Public short URL.
    pub url: String,
    /// Address of the shared entry, only present once unlocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Serves share metadata.
#[derive(Debug, Clone)]
pub struct ShareInfoService {
    collaborators: Collaborators,
    status: ShareStatusResolver,
    long_url_route: String,
    lookup_timeout: Duration,
}

impl ShareInfoService {
    /// Creates a new share info service.
    pub fn new(
        collaborators: Collaborators,
        long_url_route: impl Into<String>,
        lookup_timeout: Duration,
    ) -> Self {
        let status = ShareStatusResolver::new(
            collaborators.shares.clone(),
            collaborators.validator.clone(),
            lookup_timeout,
        );
        Self {
            collaborators,
            status,
            long_url_route: long_url_route.into(),
            lookup_timeout,
        }
    }

    /// Look up a share by public id.
    ///
    /// Missing shares yield `NotFound`, invalid ones `Expired`. With
    /// `count_views` the view counter is bumped in the background.
    pub async fn get(
        &self,
        public_id: &str,
        password: &str,
        count_views: bool,
        viewer: &Viewer,
    ) -> AppResult<ShareInfo> {
        let id = self
            .collaborators
            .ids
            .decode(public_id, IdKind::Share)
            .map_err(|_| AppError::not_found("Share not found"))?;

        match self
            .status
            .resolve_for_info(ShareId::new(id), viewer, password, count_views)
            .await
        {
            ShareLoad::Ok { share, unlocked } => self.describe(public_id, &share, unlocked, false),
            ShareLoad::NotFound => Err(AppError::not_found("Share not found")),
            ShareLoad::Expired { reason, .. } => Err(AppError::with_source(
                ErrorKind::Expired,
                "Share link expired",
                reason,
            )),
            ShareLoad::Error(e) => Err(e),
        }
    }

    /// List the shares of a user.
    ///
    /// The owner sees every share; everyone else only the public ones.
    pub async fn list_for_user(&self, owner: UserId, viewer: &Viewer) -> AppResult<Vec<ShareInfo>> {
        let shares = if viewer.is(owner) {
            bounded(
                self.lookup_timeout,
                "Share listing",
                self.collaborators.shares.list_by_user(owner),
            )
            .await?
        } else {
            bounded(
                self.lookup_timeout,
                "Public share listing",
                self.collaborators.shares.list_public(owner),
            )
            .await?
        };

        info!(owner = %owner, count = shares.len(), "Listed shares");

        let mut listed = Vec::with_capacity(shares.len());
        for share in &shares {
            let expired = bounded(
                self.lookup_timeout,
                "Share validation",
                self.collaborators.validator.is_valid(share),
            )
            .await
            .is_err();
            let unlocked = ShareStatusResolver::is_unlocked(share, "", viewer);
            let public_id = self.collaborators.ids.encode(share.id.get(), IdKind::Share);
            listed.push(self.describe(&public_id, share, unlocked, expired)?);
        }
        Ok(listed)
    }

    fn describe(
        &self,
        public_id: &str,
        share: &ShareRecord,
        unlocked: bool,
        expired: bool,
    ) -> AppResult<ShareInfo> {
        let site_url = self.collaborators.site.site_url()?;
        let urls = RedirectUrlBuilder::new(site_url, self.long_url_route.as_str());
        let root = share.root.as_ref().map(ResolvedEntry::from_entry);

        Ok(ShareInfo {
            id: public_id.to_string(),
            name: root
                .as_ref()
                .map(|entry| entry.display_name.clone())
                .unwrap_or_default(),
            kind: root.as_ref().map(|entry| entry.kind),
            owner: share
                .owner
                .as_ref()
                .map(|owner| owner.nickname.clone())
                .filter(|nickname| !nickname.is_empty()),
            locked: share.is_locked(),
            unlocked,
            expired,
            created_at: share.created_at,
            expires_at: share.expires_at,
            views: share.views,
            downloads: share.downloads,
            remaining_downloads: share.remaining_downloads,
            url: urls.share_url(public_id, ""),
            source: (unlocked && root.is_some())
                .then(|| ShareUri::new(public_id, "").to_string()),
        })
    }
}
