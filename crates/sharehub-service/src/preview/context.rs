//! Values a preview document is rendered from.

/// Everything that may appear in a preview title, description, or document.
///
/// Entry fields stay empty for status scenarios so nothing about a hidden
/// share leaks. The owner name only ever holds the public nickname.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewContext {
    /// Site name.
    pub site_name: String,
    /// Site description.
    pub site_description: String,
    /// Site base URL.
    pub site_url: String,
    /// Public short URL of the share (`og:url`).
    pub share_url: String,
    /// Public share id.
    pub share_id: String,
    /// File name (file scenario).
    pub file_name: String,
    /// Formatted file size (file scenario).
    pub file_size: String,
    /// File extension without dot (file scenario).
    pub file_ext: String,
    /// Folder name (folder scenario).
    pub folder_name: String,
    /// Owner nickname.
    pub owner_name: String,
    /// Status label (status scenarios).
    pub status: String,
    /// Link text of the no-script fallback.
    pub display_name: String,
    /// Absolute thumbnail URL, empty when no icon is configured.
    pub thumbnail_url: String,
    /// Where the browser is sent.
    pub redirect_url: String,
}
