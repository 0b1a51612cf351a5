//! In-memory share store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;
use sharehub_core::types::{ShareId, UserId};
use sharehub_entity::share::{ShareLoadOptions, ShareRecord};
use sharehub_service::{IdCodec, IdKind, ShareStore};

/// Share store keeping every share, with its owner and entry tree, in memory.
#[derive(Debug, Clone)]
pub struct MemoryShareStore {
    shares: Arc<DashMap<ShareId, ShareRecord>>,
    ids: Arc<dyn IdCodec>,
}

impl MemoryShareStore {
    /// Create an empty store. `ids` decodes public ids for
    /// [`ShareStore::get_by_opaque_id`].
    pub fn new(ids: Arc<dyn IdCodec>) -> Self {
        Self {
            shares: Arc::new(DashMap::new()),
            ids,
        }
    }

    /// Create a store holding the given shares.
    pub fn with_shares(ids: Arc<dyn IdCodec>, shares: impl IntoIterator<Item = ShareRecord>) -> Self {
        let store = Self::new(ids);
        for share in shares {
            store.insert(share);
        }
        store
    }

    /// Insert or replace a share.
    pub fn insert(&self, share: ShareRecord) {
        self.shares.insert(share.id, share);
    }

    /// Number of stored shares.
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Whether the store has no shares.
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    fn shaped(share: &ShareRecord, options: ShareLoadOptions) -> ShareRecord {
        let mut share = share.clone();
        if !options.with_owner {
            share.owner = None;
        }
        if !options.with_root {
            share.root = None;
        }
        share
    }

    fn collect(&self, keep: impl Fn(&ShareRecord) -> bool) -> Vec<ShareRecord> {
        let mut shares: Vec<ShareRecord> = self
            .shares
            .iter()
            .filter(|entry| keep(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        shares.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        shares
    }
}

fn owned_by(share: &ShareRecord, user: UserId) -> bool {
    share.owner.as_ref().is_some_and(|owner| owner.id == user)
}

#[async_trait]
impl ShareStore for MemoryShareStore {
    async fn get_by_id(
        &self,
        id: ShareId,
        options: ShareLoadOptions,
    ) -> AppResult<Option<ShareRecord>> {
        Ok(self
            .shares
            .get(&id)
            .map(|entry| Self::shaped(entry.value(), options)))
    }

    async fn get_by_opaque_id(
        &self,
        opaque_id: &str,
        options: ShareLoadOptions,
    ) -> AppResult<Option<ShareRecord>> {
        match self.ids.decode(opaque_id, IdKind::Share) {
            Ok(id) => self.get_by_id(ShareId::new(id), options).await,
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn mark_viewed(&self, id: ShareId) -> AppResult<()> {
        let mut share = self
            .shares
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Share {id} not found")))?;
        share.views += 1;
        debug!(share_id = %id, views = share.views, "Share viewed");
        Ok(())
    }

    async fn list_by_user(&self, user: UserId) -> AppResult<Vec<ShareRecord>> {
        Ok(self.collect(|share| owned_by(share, user)))
    }

    async fn list_public(&self, user: UserId) -> AppResult<Vec<ShareRecord>> {
        Ok(self.collect(|share| share.is_public && owned_by(share, user)))
    }
}
