//! Entry entity model.

use serde::{Deserialize, Serialize};

use sharehub_core::types::EntryId;

/// Whether an entry is a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A folder that may contain other entries.
    Folder,
}

impl EntryKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

/// A file-system entry reachable through a share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Unique entry identifier.
    pub id: EntryId,
    /// File or folder.
    pub kind: EntryKind,
    /// Raw stored name.
    pub name: String,
    /// Display-name override set by the owner (takes precedence over `name`).
    #[serde(default)]
    pub display_name: Option<String>,
    /// Size in bytes; only meaningful for files.
    #[serde(default)]
    pub size: i64,
    /// Child entries (folders only).
    #[serde(default)]
    pub children: Vec<Entry>,
}

impl Entry {
    /// Check whether the entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Find a direct child by its raw name.
    pub fn child(&self, name: &str) -> Option<&Entry> {
        self.children.iter().find(|child| child.name == name)
    }

    /// The display-name override, ignoring empty values.
    pub fn display_name_override(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|name| !name.is_empty())
    }
}
