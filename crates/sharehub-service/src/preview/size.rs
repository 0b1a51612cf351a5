//! Human-readable file sizes.

const KB: i64 = 1024;
const MB: i64 = 1024 * KB;
const GB: i64 = 1024 * MB;
const TB: i64 = 1024 * GB;

/// Format a byte count with 1024-based units and two decimals (`1.50 MB`).
///
/// Sizes below one kilobyte are printed as whole bytes (`512 B`).
pub fn format_file_size(size: i64) -> String {
    let scaled = |unit: i64| size as f64 / unit as f64;
    match size {
        s if s >= TB => format!("{:.2} TB", scaled(TB)),
        s if s >= GB => format!("{:.2} GB", scaled(GB)),
        s if s >= MB => format!("{:.2} MB", scaled(MB)),
        s if s >= KB => format!("{:.2} KB", scaled(KB)),
        s => format!("{s} B"),
    }
}
