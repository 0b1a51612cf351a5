//! Group capability model.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A capability a user group can be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Open and download share links.
    ShareDownload,
    /// Create share links.
    ShareCreate,
}

/// The set of capabilities enabled for a group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSet {
    capabilities: HashSet<Capability>,
}

impl PermissionSet {
    /// Create a permission set from a list of capabilities.
    pub fn new(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// Check whether the capability is enabled.
    pub fn enabled(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}
