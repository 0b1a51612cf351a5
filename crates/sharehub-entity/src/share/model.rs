//! Share entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sharehub_core::types::ShareId;

use crate::entry::Entry;
use crate::user::ShareOwner;

/// A share link granting access to a file or folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRecord {
    /// Unique share identifier.
    pub id: ShareId,
    /// Plaintext share password. Empty or absent means unlocked.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    /// When the share was created.
    pub created_at: DateTime<Utc>,
    /// When the share expires.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether the share has not been cancelled.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Downloads left before the share expires, if limited.
    #[serde(default)]
    pub remaining_downloads: Option<i64>,
    /// View counter.
    #[serde(default)]
    pub views: i64,
    /// Download counter.
    #[serde(default)]
    pub downloads: i64,
    /// Whether the share shows up in its owner's public listing.
    #[serde(default)]
    pub is_public: bool,
    /// Eager-loaded owner.
    #[serde(default)]
    pub owner: Option<ShareOwner>,
    /// Eager-loaded shared entry.
    #[serde(default)]
    pub root: Option<Entry>,
}

impl ShareRecord {
    /// Check whether the share requires a password.
    pub fn is_locked(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Owner nickname, empty when the owner is not loaded.
    pub fn owner_nickname(&self) -> &str {
        self.owner.as_ref().map(|o| o.nickname.as_str()).unwrap_or("")
    }

    /// Check whether the share has passed its expiry time.
    pub fn is_past_expiry(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

fn default_active() -> bool {
    true
}

/// Which associations to eager-load with a share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShareLoadOptions {
    /// Load the owning user.
    pub with_owner: bool,
    /// Load the shared entry.
    pub with_root: bool,
}

impl ShareLoadOptions {
    /// Load the share together with its owner and shared entry.
    pub fn with_associations() -> Self {
        Self {
            with_owner: true,
            with_root: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(password: Option<&str>) -> ShareRecord {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "password": password,
            "created_at": "2026-01-01T00:00:00Z",
        }))
        .expect("valid record")
    }

    #[test]
    fn test_locked_only_with_non_empty_password() {
        assert!(!record(None).is_locked());
        assert!(!record(Some("")).is_locked());
        assert!(record(Some("abc")).is_locked());
    }

    #[test]
    fn test_password_is_never_serialized() {
        let json = serde_json::to_value(record(Some("secret"))).expect("serialize");
        assert!(json.get("password").is_none());
        assert_eq!(json["is_active"], true);
    }

    #[test]
    fn test_missing_owner_has_empty_nickname() {
        assert_eq!(record(None).owner_nickname(), "");
    }
}
