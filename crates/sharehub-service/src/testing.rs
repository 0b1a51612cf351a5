//! In-crate fakes for service unit tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use url::Url;

use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;
use sharehub_core::types::{EntryId, ShareId, UserId};
use sharehub_entity::entry::{Entry, EntryKind};
use sharehub_entity::permission::{Capability, PermissionSet};
use sharehub_entity::share::{ShareLoadOptions, ShareRecord};
use sharehub_entity::user::ShareOwner;

use crate::collaborators::{
    Collaborators, EntryResolver, IdCodec, IdKind, PermissionGate, PwaIcons, ShareStore,
    ShareValidator, SiteBasic, SiteSettings,
};
use crate::share::uri::ShareUri;

pub const OWNER_ID: UserId = UserId::new(100);

pub fn file(id: i64, name: &str, size: i64) -> Entry {
    Entry {
        id: EntryId::new(id),
        kind: EntryKind::File,
        name: name.to_string(),
        display_name: None,
        size,
        children: Vec::new(),
    }
}

pub fn folder(id: i64, name: &str, children: Vec<Entry>) -> Entry {
    Entry {
        id: EntryId::new(id),
        kind: EntryKind::Folder,
        name: name.to_string(),
        display_name: None,
        size: 0,
        children,
    }
}

pub fn share_with_root(id: i64, password: Option<&str>, root: Entry) -> ShareRecord {
    ShareRecord {
        id: ShareId::new(id),
        password: password.map(str::to_string),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        expires_at: None,
        is_active: true,
        remaining_downloads: None,
        views: 0,
        downloads: 0,
        is_public: false,
        owner: Some(ShareOwner {
            id: OWNER_ID,
            nickname: "alice".to_string(),
            email: Some("alice@example.com".to_string()),
        }),
        root: Some(root),
    }
}

#[derive(Debug, Default)]
pub struct FakeShares {
    shares: Mutex<HashMap<i64, ShareRecord>>,
    fail: bool,
    delay: Option<Duration>,
    pub viewed: AtomicUsize,
}

impl FakeShares {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn insert(&self, share: ShareRecord) {
        self.shares.lock().unwrap().insert(share.id.get(), share);
    }

    fn all(&self) -> Vec<ShareRecord> {
        let mut all: Vec<ShareRecord> = self.shares.lock().unwrap().values().cloned().collect();
        all.sort_by_key(|s| s.id);
        all
    }
}

#[async_trait]
impl ShareStore for FakeShares {
    async fn get_by_id(&self, id: ShareId, _: ShareLoadOptions) -> AppResult<Option<ShareRecord>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(AppError::storage("database is down"));
        }
        Ok(self.shares.lock().unwrap().get(&id.get()).cloned())
    }

    async fn get_by_opaque_id(
        &self,
        opaque_id: &str,
        options: ShareLoadOptions,
    ) -> AppResult<Option<ShareRecord>> {
        match FakeIds.decode(opaque_id, IdKind::Share) {
            Ok(id) => self.get_by_id(ShareId::new(id), options).await,
            Err(_) => Ok(None),
        }
    }

    async fn mark_viewed(&self, _: ShareId) -> AppResult<()> {
        self.viewed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn list_by_user(&self, user: UserId) -> AppResult<Vec<ShareRecord>> {
        Ok(self
            .all()
            .into_iter()
            .filter(|s| s.owner.as_ref().is_some_and(|o| o.id == user))
            .collect())
    }

    async fn list_public(&self, user: UserId) -> AppResult<Vec<ShareRecord>> {
        Ok(self
            .list_by_user(user)
            .await?
            .into_iter()
            .filter(|s| s.is_public)
            .collect())
    }
}

#[derive(Debug)]
pub struct FakeValidator;

#[async_trait]
impl ShareValidator for FakeValidator {
    async fn is_valid(&self, share: &ShareRecord) -> AppResult<()> {
        if !share.is_active {
            return Err(AppError::expired("Share has been cancelled"));
        }
        if share.is_past_expiry(Utc::now()) {
            return Err(AppError::expired("Share has expired"));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakePermissions {
    pub anonymous_download: bool,
    pub fail: bool,
}

#[async_trait]
impl PermissionGate for FakePermissions {
    async fn anonymous_permissions(&self) -> AppResult<PermissionSet> {
        if self.fail {
            return Err(AppError::storage("group lookup failed"));
        }
        if self.anonymous_download {
            Ok(PermissionSet::new([Capability::ShareDownload]))
        } else {
            Ok(PermissionSet::default())
        }
    }
}

/// Encodes share `n` as `s{n}`.
#[derive(Debug)]
pub struct FakeIds;

impl IdCodec for FakeIds {
    fn encode(&self, id: i64, _: IdKind) -> String {
        format!("s{id}")
    }

    fn decode(&self, raw: &str, _: IdKind) -> AppResult<i64> {
        raw.strip_prefix('s')
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| AppError::not_found("Unknown id"))
    }
}

/// Resolves share paths from a fixed table keyed by path.
#[derive(Debug, Default)]
pub struct FakeEntries {
    entries: Mutex<HashMap<String, Entry>>,
}

impl FakeEntries {
    pub fn insert(&self, path: &str, entry: Entry) {
        self.entries.lock().unwrap().insert(path.to_string(), entry);
    }
}

#[async_trait]
impl EntryResolver for FakeEntries {
    async fn resolve(&self, uri: &ShareUri) -> AppResult<Entry> {
        self.entries
            .lock()
            .unwrap()
            .get(uri.path())
            .cloned()
            .ok_or_else(|| AppError::not_found("No such entry"))
    }
}

#[derive(Debug)]
pub struct FakeSite {
    pub url: String,
    pub icons: PwaIcons,
}

impl Default for FakeSite {
    fn default() -> Self {
        Self {
            url: "https://files.example.com".to_string(),
            icons: PwaIcons {
                large_icon: "/static/icon-512.png".to_string(),
                medium_icon: String::new(),
            },
        }
    }
}

impl SiteSettings for FakeSite {
    fn site_basic(&self) -> SiteBasic {
        SiteBasic {
            name: "ShareHub".to_string(),
            description: "Files for everyone".to_string(),
        }
    }

    fn site_url(&self) -> AppResult<Url> {
        Url::parse(&self.url).map_err(|e| AppError::configuration(e.to_string()))
    }

    fn pwa(&self) -> PwaIcons {
        self.icons.clone()
    }
}

pub fn collaborators(shares: Arc<FakeShares>) -> Collaborators {
    collaborators_with(shares, FakeEntries::default(), true)
}

pub fn collaborators_with(
    shares: Arc<FakeShares>,
    entries: FakeEntries,
    anonymous_download: bool,
) -> Collaborators {
    Collaborators {
        shares,
        validator: Arc::new(FakeValidator),
        permissions: Arc::new(FakePermissions {
            anonymous_download,
            fail: false,
        }),
        ids: Arc::new(FakeIds),
        entries: Arc::new(entries),
        site: Arc::new(FakeSite::default()),
    }
}
