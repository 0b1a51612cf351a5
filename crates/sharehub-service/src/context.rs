//! Viewer context carried through share resolution.

use serde::{Deserialize, Serialize};

use sharehub_core::types::UserId;

/// Who is looking at a share.
///
/// Extracted by the API layer from the trusted authentication header and
/// passed into service methods. Anonymous visitors carry no user id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    user_id: Option<UserId>,
}

impl Viewer {
    /// An anonymous visitor.
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// An authenticated user.
    pub fn user(id: UserId) -> Self {
        Self { user_id: Some(id) }
    }

    /// The authenticated user id, if any.
    pub fn id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns whether the visitor is anonymous.
    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }

    /// Returns whether the visitor is the given user.
    pub fn is(&self, id: UserId) -> bool {
        self.user_id == Some(id)
    }
}
