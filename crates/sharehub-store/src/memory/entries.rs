//! Entry resolution against the entry trees held by the share store.

use async_trait::async_trait;
use subtle::ConstantTimeEq;

use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;
use sharehub_entity::entry::Entry;
use sharehub_entity::share::ShareLoadOptions;
use sharehub_service::{EntryResolver, ShareStore, ShareUri};

use super::shares::MemoryShareStore;

/// Resolves `sharehub://` addresses by walking a share's entry tree.
#[derive(Debug, Clone)]
pub struct MemoryEntryResolver {
    shares: MemoryShareStore,
}

impl MemoryEntryResolver {
    /// Create a resolver over a share store.
    pub fn new(shares: MemoryShareStore) -> Self {
        Self { shares }
    }
}

#[async_trait]
impl EntryResolver for MemoryEntryResolver {
    async fn resolve(&self, uri: &ShareUri) -> AppResult<Entry> {
        let share = self
            .shares
            .get_by_opaque_id(uri.id(), ShareLoadOptions::with_associations())
            .await?
            .ok_or_else(|| AppError::not_found("Share not found"))?;

        if let Some(expected) = share.password.as_deref().filter(|p| !p.is_empty()) {
            let supplied = uri.password().as_bytes();
            if !bool::from(supplied.ct_eq(expected.as_bytes())) {
                return Err(AppError::locked("Share password is incorrect"));
            }
        }

        let mut current = share
            .root
            .as_ref()
            .ok_or_else(|| AppError::not_found("Shared entry not found"))?;
        for segment in uri.segments() {
            if !current.is_folder() {
                return Err(AppError::not_found(format!("'{segment}' is not inside a folder")));
            }
            current = current
                .child(segment)
                .ok_or_else(|| AppError::not_found(format!("Entry '{segment}' not found")))?;
        }
        Ok(current.clone())
    }
}
