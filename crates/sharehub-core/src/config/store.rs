//! In-memory share store configuration.

use serde::{Deserialize, Serialize};

/// Settings for the bundled in-memory collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON file with users, entries, and shares loaded at startup.
    /// Empty means start with an empty store.
    #[serde(default)]
    pub seed_file: String,
    /// Salt for the reversible public id codec.
    #[serde(default = "default_id_salt")]
    pub id_salt: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_file: String::new(),
            id_salt: default_id_salt(),
        }
    }
}

fn default_id_salt() -> String {
    "sharehub".to_string()
}
