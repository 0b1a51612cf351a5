//! Share status classification.

use std::sync::Arc;
use std::time::Duration;

use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use sharehub_core::error::AppError;
use sharehub_core::types::ShareId;
use sharehub_entity::share::{ShareLoadOptions, ShareRecord};

use super::bounded;
use crate::collaborators::{ShareStore, ShareValidator};
use crate::context::Viewer;

/// Coarse outcome of loading a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareStatus {
    /// The share exists and is valid.
    Ok,
    /// No share with this id.
    NotFound,
    /// The share exists but is expired, cancelled, or exhausted.
    Expired,
    /// The lookup itself failed.
    Error,
}

/// Result of loading a share, with the data each outcome carries.
#[derive(Debug)]
pub enum ShareLoad {
    /// Valid share. `unlocked` tells whether the viewer may see its content.
    Ok {
        /// The loaded share.
        share: ShareRecord,
        /// Whether the password requirement is satisfied.
        unlocked: bool,
    },
    /// No share with this id.
    NotFound,
    /// The share failed validation.
    Expired {
        /// The loaded share.
        share: ShareRecord,
        /// Why it is no longer valid.
        reason: AppError,
    },
    /// The lookup failed; the cause is retained.
    Error(AppError),
}

impl ShareLoad {
    /// Project to the coarse status.
    pub fn status(&self) -> ShareStatus {
        match self {
            Self::Ok { .. } => ShareStatus::Ok,
            Self::NotFound => ShareStatus::NotFound,
            Self::Expired { .. } => ShareStatus::Expired,
            Self::Error(_) => ShareStatus::Error,
        }
    }

    /// The loaded share, when one was found.
    pub fn share(&self) -> Option<&ShareRecord> {
        match self {
            Self::Ok { share, .. } | Self::Expired { share, .. } => Some(share),
            Self::NotFound | Self::Error(_) => None,
        }
    }
}

/// Loads shares and classifies them for a viewer.
#[derive(Debug, Clone)]
pub struct ShareStatusResolver {
    shares: Arc<dyn ShareStore>,
    validator: Arc<dyn ShareValidator>,
    lookup_timeout: Duration,
}

impl ShareStatusResolver {
    /// Creates a new status resolver.
    pub fn new(
        shares: Arc<dyn ShareStore>,
        validator: Arc<dyn ShareValidator>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            shares,
            validator,
            lookup_timeout,
        }
    }

    /// Load a share with its owner and entry, validate it, and decide
    /// whether the viewer has unlocked it.
    pub async fn resolve(&self, id: ShareId, viewer: &Viewer, password: &str) -> ShareLoad {
        let lookup = bounded(
            self.lookup_timeout,
            "Share lookup",
            self.shares
                .get_by_id(id, ShareLoadOptions::with_associations()),
        )
        .await;

        let share = match lookup {
            Ok(Some(share)) => share,
            Ok(None) => return ShareLoad::NotFound,
            Err(e) => {
                warn!(share_id = %id, error = %e, "Share lookup failed");
                return ShareLoad::Error(e);
            }
        };

        let validation = bounded(
            self.lookup_timeout,
            "Share validation",
            self.validator.is_valid(&share),
        )
        .await;
        if let Err(reason) = validation {
            debug!(share_id = %id, reason = %reason, "Share is no longer valid");
            return ShareLoad::Expired { share, reason };
        }

        let unlocked = Self::is_unlocked(&share, password, viewer);
        ShareLoad::Ok { share, unlocked }
    }

    /// Same as [`ShareStatusResolver::resolve`] and, when `count_views` is
    /// set and the share is valid, records a view in the background.
    ///
    /// The view counter is best effort: failures are logged and dropped and
    /// the response never waits for it.
    pub async fn resolve_for_info(
        &self,
        id: ShareId,
        viewer: &Viewer,
        password: &str,
        count_views: bool,
    ) -> ShareLoad {
        let load = self.resolve(id, viewer, password).await;
        if count_views && load.status() == ShareStatus::Ok {
            let shares = Arc::clone(&self.shares);
            tokio::spawn(async move {
                if let Err(e) = shares.mark_viewed(id).await {
                    debug!(share_id = %id, error = %e, "Failed to record share view");
                }
            });
        }
        load
    }

    /// Whether the viewer may see the content of a share.
    ///
    /// True when the share has no password, when the supplied password
    /// matches, or when the viewer owns the share.
    pub fn is_unlocked(share: &ShareRecord, password: &str, viewer: &Viewer) -> bool {
        let Some(expected) = share.password.as_deref().filter(|p| !p.is_empty()) else {
            return true;
        };
        if bool::from(expected.as_bytes().ct_eq(password.as_bytes())) {
            return true;
        }
        share.owner.as_ref().is_some_and(|owner| viewer.is(owner.id))
    }
}
