//! Path display utilities for report entries.
//!
//! Report paths are relative to the scan root and always use forward slashes,
//! so the same tree produces the same report on every platform.

use std::path::Path;

/// Format a path for display, making it relative to the scan root if possible.
///
/// - If `root` is provided and `path` is under it, returns the relative path.
/// - Uses forward slashes as separators.
/// - Returns `"."` when `path` equals `root`.
#[must_use]
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    let relative = root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let result = normalize_separators(&relative.to_string_lossy());

    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Display path of a file directly inside a directory whose display path is `dir`.
///
/// The root keeps its `.` component, so `child_path(".", "x.js")` is `"./x.js"`.
#[must_use]
pub fn child_path(dir: &str, name: &str) -> String {
    format!("{dir}/{name}")
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
