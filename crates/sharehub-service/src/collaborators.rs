//! Narrow interfaces to the systems the share engine depends on.
//!
//! Persistence, file metadata, group permissions, id obfuscation, and site
//! settings all live outside this crate. Each is consumed through one of the
//! traits below and injected as an `Arc<dyn Trait>` inside [`Collaborators`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use sharehub_core::result::AppResult;
use sharehub_core::types::{ShareId, UserId};
use sharehub_entity::entry::Entry;
use sharehub_entity::permission::PermissionSet;
use sharehub_entity::share::{ShareLoadOptions, ShareRecord};

use crate::share::uri::ShareUri;

/// Share persistence.
#[async_trait]
pub trait ShareStore: Send + Sync + fmt::Debug + 'static {
    /// Load a share by its numeric id. `Ok(None)` means the share does not exist.
    async fn get_by_id(
        &self,
        id: ShareId,
        options: ShareLoadOptions,
    ) -> AppResult<Option<ShareRecord>>;

    /// Load a share by its public (encoded) id.
    async fn get_by_opaque_id(
        &self,
        opaque_id: &str,
        options: ShareLoadOptions,
    ) -> AppResult<Option<ShareRecord>>;

    /// Increment the view counter of a share.
    async fn mark_viewed(&self, id: ShareId) -> AppResult<()>;

    /// All shares created by a user.
    async fn list_by_user(&self, user: UserId) -> AppResult<Vec<ShareRecord>>;

    /// Shares a user has marked public.
    async fn list_public(&self, user: UserId) -> AppResult<Vec<ShareRecord>>;
}

/// Decides whether a loaded share is still usable.
#[async_trait]
pub trait ShareValidator: Send + Sync + fmt::Debug + 'static {
    /// Return `Err` (usually [`sharehub_core::ErrorKind::Expired`]) with the
    /// reason when the share is expired, cancelled, or exhausted.
    async fn is_valid(&self, share: &ShareRecord) -> AppResult<()>;
}

/// Group permission lookups.
#[async_trait]
pub trait PermissionGate: Send + Sync + fmt::Debug + 'static {
    /// Capabilities of the anonymous group.
    async fn anonymous_permissions(&self) -> AppResult<PermissionSet>;
}

/// Kind of object an opaque id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// A share link.
    Share,
    /// A user.
    User,
    /// A file or folder.
    Entry,
}

impl IdKind {
    /// Stable tag mixed into encoded ids.
    pub fn tag(&self) -> u8 {
        match self {
            Self::Share => 1,
            Self::User => 2,
            Self::Entry => 3,
        }
    }
}

/// Reversible obfuscation of numeric ids.
pub trait IdCodec: Send + Sync + fmt::Debug + 'static {
    /// Encode a numeric id into its public form.
    fn encode(&self, id: i64, kind: IdKind) -> String;

    /// Decode a public id. Fails with `NotFound` when the value was not
    /// produced by [`IdCodec::encode`] for the same kind.
    fn decode(&self, raw: &str, kind: IdKind) -> AppResult<i64>;
}

/// Resolves a share address to the entry it points at.
#[async_trait]
pub trait EntryResolver: Send + Sync + fmt::Debug + 'static {
    /// Resolve the entry addressed by `uri`, enforcing the share password.
    async fn resolve(&self, uri: &ShareUri) -> AppResult<Entry>;
}

/// Basic site identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteBasic {
    /// Site name.
    pub name: String,
    /// Site description.
    pub description: String,
}

/// Progressive web app icons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PwaIcons {
    /// Large icon (absolute or site-relative).
    pub large_icon: String,
    /// Medium icon (absolute or site-relative).
    pub medium_icon: String,
}

/// Site settings provider.
pub trait SiteSettings: Send + Sync + fmt::Debug + 'static {
    /// Site name and description.
    fn site_basic(&self) -> SiteBasic;

    /// Canonical base URL.
    fn site_url(&self) -> AppResult<Url>;

    /// PWA icon settings.
    fn pwa(&self) -> PwaIcons;
}

/// Immutable bundle of collaborators shared by all services.
#[derive(Debug, Clone)]
pub struct Collaborators {
    /// Share persistence.
    pub shares: Arc<dyn ShareStore>,
    /// Share validity rules.
    pub validator: Arc<dyn ShareValidator>,
    /// Group permissions.
    pub permissions: Arc<dyn PermissionGate>,
    /// Id obfuscation.
    pub ids: Arc<dyn IdCodec>,
    /// Entry resolution.
    pub entries: Arc<dyn EntryResolver>,
    /// Site settings.
    pub site: Arc<dyn SiteSettings>,
}
