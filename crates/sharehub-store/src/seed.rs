//! Startup data for the in-memory store.
//!
//! ```json
//! {
//!   "users": [{ "id": 1, "nickname": "alice", "email": "alice@example.com" }],
//!   "shares": [{
//!     "id": 1,
//!     "owner_id": 1,
//!     "password": "secret",
//!     "created_at": "2026-01-01T00:00:00Z",
//!     "root": { "id": 10, "kind": "folder", "name": "Photos", "children": [] }
//!   }]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;
use sharehub_core::types::UserId;
use sharehub_entity::share::ShareRecord;
use sharehub_entity::user::ShareOwner;

/// A share as written in the seed file, with its owner by reference.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedShare {
    /// Id of the owning user in [`SeedData::users`].
    #[serde(default)]
    pub owner_id: Option<UserId>,
    /// The share itself.
    #[serde(flatten)]
    pub share: ShareRecord,
}

/// Users and shares loaded at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Known users.
    #[serde(default)]
    pub users: Vec<ShareOwner>,
    /// Shares with their entry trees.
    #[serde(default)]
    pub shares: Vec<SeedShare>,
}

impl SeedData {
    /// Parse seed data from JSON.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read seed data from a JSON file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                sharehub_core::ErrorKind::Configuration,
                format!("Failed to read seed file '{}'", path.display()),
                e,
            )
        })?;
        let seed = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            users = seed.users.len(),
            shares = seed.shares.len(),
            "Loaded seed data"
        );
        Ok(seed)
    }

    /// Shares with their owners attached.
    ///
    /// Fails when a share references a user that is not in the file.
    pub fn into_shares(self) -> AppResult<Vec<ShareRecord>> {
        let Self { users, shares } = self;
        shares
            .into_iter()
            .map(|SeedShare { owner_id, mut share }| {
                if let Some(owner_id) = owner_id {
                    let owner = users.iter().find(|u| u.id == owner_id).ok_or_else(|| {
                        AppError::validation(format!(
                            "Share {} references unknown user {owner_id}",
                            share.id
                        ))
                    })?;
                    share.owner = Some(owner.clone());
                }
                Ok(share)
            })
            .collect()
    }
}
