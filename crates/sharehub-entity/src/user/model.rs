//! Share owner model.

use serde::{Deserialize, Serialize};

use sharehub_core::types::UserId;

/// The user who created a share, as eager-loaded with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareOwner {
    /// Unique user identifier.
    pub id: UserId,
    /// Public nickname; the only owner field ever shown to visitors.
    #[serde(default)]
    pub nickname: String,
    /// Email address. Never rendered or returned by public endpoints.
    #[serde(default, skip_serializing)]
    pub email: Option<String>,
}
