//! Sub-path cleaning and resolution inside a shared folder.

use std::sync::Arc;
use std::time::Duration;

use sharehub_core::error::{AppError, ErrorKind};
use sharehub_core::result::AppResult;
use sharehub_entity::entry::{Entry, EntryKind};
use sharehub_entity::share::ShareRecord;

use super::bounded;
use super::uri::ShareUri;
use crate::collaborators::EntryResolver;

/// Fallback display name of a file without a name.
pub const DEFAULT_FILE_NAME: &str = "Shared File";

/// Fallback display name of a folder without a name.
pub const DEFAULT_FOLDER_NAME: &str = "Shared Folder";

/// Lexically clean a share-relative path.
///
/// The path is treated as if rooted: `.` and empty segments are dropped and
/// `..` removes the previous segment but never climbs above the root. The
/// result has no leading separator; empty input yields an empty string.
pub fn clean_share_path(raw: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// An entry as presented in a preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// File or folder.
    pub kind: EntryKind,
    /// Display name, never empty.
    pub display_name: String,
    /// Size in bytes.
    pub size: i64,
    /// Extension of the display name without the dot, empty when none.
    pub extension: String,
}

impl ResolvedEntry {
    /// Compute the presentation of an entry.
    pub fn from_entry(entry: &Entry) -> Self {
        let display_name = entry
            .display_name_override()
            .or(Some(entry.name.as_str()).filter(|name| !name.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| match entry.kind {
                EntryKind::File => DEFAULT_FILE_NAME.to_string(),
                EntryKind::Folder => DEFAULT_FOLDER_NAME.to_string(),
            });
        let extension = extension_of(&display_name).to_string();

        Self {
            kind: entry.kind,
            display_name,
            size: entry.size,
            extension,
        }
    }

    /// Check whether the entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

fn extension_of(name: &str) -> &str {
    let base = name.rsplit('/').next().unwrap_or(name);
    base.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

/// Resolves the entry a preview should describe.
#[derive(Debug, Clone)]
pub struct SharePathResolver {
    entries: Arc<dyn EntryResolver>,
    lookup_timeout: Duration,
}

impl SharePathResolver {
    /// Creates a new path resolver.
    pub fn new(entries: Arc<dyn EntryResolver>, lookup_timeout: Duration) -> Self {
        Self {
            entries,
            lookup_timeout,
        }
    }

    /// Resolve the share root, or the entry at `sub_path` below it.
    ///
    /// A sub-path is only meaningful for folder shares; anything else, and
    /// any failure of the entry resolver, is reported as `NotFound` so the
    /// caller can treat it as an invalid link.
    pub async fn resolve(
        &self,
        share_id: &str,
        password: &str,
        share: &ShareRecord,
        sub_path: &str,
    ) -> AppResult<ResolvedEntry> {
        let root = share
            .root
            .as_ref()
            .ok_or_else(|| AppError::not_found("Share has no entry"))?;

        let cleaned = clean_share_path(sub_path);
        if cleaned.is_empty() {
            return Ok(ResolvedEntry::from_entry(root));
        }
        if !root.is_folder() {
            return Err(AppError::not_found("Sub-paths are only available in folder shares"));
        }

        let uri = ShareUri::new(share_id, password).join(&cleaned);
        let entry = bounded(self.lookup_timeout, "Entry lookup", self.entries.resolve(&uri))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::NotFound, "Path is not available", e))?;

        Ok(ResolvedEntry::from_entry(&entry))
    }
}
