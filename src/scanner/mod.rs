mod filter;

pub use filter::{DescentFilter, ExtensionFilter, FileFilter, PrunePolicy};

use std::cmp::Ordering;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{Result, RoleReportError};
use crate::output::{ScanProgress, child_path, display_path};
use crate::report::{Report, ScanEntry};

/// Trait for producing a report from a directory tree.
pub trait Scanner {
    /// Scan the tree rooted at `root` and return its entries in traversal order.
    ///
    /// # Errors
    /// Returns an error if any directory cannot be listed, or if a marker file or
    /// eligible file cannot be read as UTF-8 text.
    fn scan(&self, root: &Path) -> Result<Report>;
}

/// Walks a tree and records marked directories and their eligible files.
pub struct RoleScanner<F: FileFilter, D: DescentFilter> {
    filter: F,
    descent: D,
    marker_file: String,
    content_marker: String,
    progress: ScanProgress,
}

impl RoleScanner<ExtensionFilter, PrunePolicy> {
    /// Build a scanner from loaded configuration.
    ///
    /// # Errors
    /// Returns an error if an exclude pattern is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let filter = ExtensionFilter::new(&config.scanner.extensions);
        let descent = PrunePolicy::new(
            config.scanner.skip_prefixes.clone(),
            &config.scanner.exclude,
        )?;
        Ok(Self::new(
            filter,
            descent,
            config.scanner.marker_file.trim(),
            &config.content.marker,
        ))
    }
}

impl<F: FileFilter, D: DescentFilter> RoleScanner<F, D> {
    #[must_use]
    pub fn new(filter: F, descent: D, marker_file: &str, content_marker: &str) -> Self {
        Self {
            filter,
            descent,
            marker_file: marker_file.to_string(),
            content_marker: content_marker.to_string(),
            progress: ScanProgress::hidden(),
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ScanProgress) -> Self {
        self.progress = progress;
        self
    }

    /// Whether the walker may enter `entry`. Only directories below the root are pruned.
    fn may_enter(&self, root: &Path, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let descend = self.descent.should_descend(relative);
        if !descend {
            debug!(path = %relative.display(), "Pruned directory");
        }
        descend
    }

    fn scan_impl(&self, root: &Path) -> Result<Report> {
        if !root.is_dir() {
            return Err(RoleReportError::Config(format!(
                "Scan root is not a directory: {}",
                root.display()
            )));
        }

        let mut state = ScanState::default();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by(files_before_directories)
            .into_iter()
            .filter_entry(|e| self.may_enter(root, e));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                state.current = self.visit_directory(root, &entry, &mut state.entries)?;
            } else if let Some(dir) = &state.current
                && entry.depth() == dir.depth + 1
            {
                self.visit_file(&entry, &dir.shown, &mut state.entries)?;
            }
        }

        Ok(Report::new(state.entries))
    }

    /// Emit a directory record when the marker file is present.
    ///
    /// Returns the marked directory so that the file entries following it in
    /// walk order can be attributed to it.
    fn visit_directory(
        &self,
        root: &Path,
        entry: &DirEntry,
        out: &mut Vec<ScanEntry>,
    ) -> Result<Option<MarkedDir>> {
        let shown = display_path(entry.path(), Some(root));
        self.progress.inc(&shown);

        let marker_path = entry.path().join(&self.marker_file);
        if !has_marker(&marker_path)? {
            trace!(path = %shown, "No marker file");
            return Ok(None);
        }

        let role = read_text(&marker_path)?.trim().to_string();
        debug!(path = %shown, role = %role, "Marked directory");
        out.push(ScanEntry::Directory {
            path: shown.clone(),
            role,
        });

        Ok(Some(MarkedDir {
            depth: entry.depth(),
            shown,
        }))
    }

    /// Emit a file record for an eligible file of a marked directory.
    fn visit_file(
        &self,
        entry: &DirEntry,
        dir_shown: &str,
        out: &mut Vec<ScanEntry>,
    ) -> Result<()> {
        let path = entry.path();
        // Symlinks to directories are neither followed nor listed.
        if path.is_dir() || !self.filter.should_include(path) {
            return Ok(());
        }

        let name = entry.file_name().to_string_lossy();
        let shown = child_path(dir_shown, &name);
        let content = content_if_marked(path, &self.content_marker)?;
        trace!(path = %shown, embedded = content.is_some(), "Matched file");

        out.push(ScanEntry::File {
            path: shown,
            content,
        });
        Ok(())
    }
}

impl<F: FileFilter, D: DescentFilter> Scanner for RoleScanner<F, D> {
    fn scan(&self, root: &Path) -> Result<Report> {
        self.scan_impl(root)
    }
}

#[derive(Default)]
struct ScanState {
    entries: Vec<ScanEntry>,
    current: Option<MarkedDir>,
}

struct MarkedDir {
    depth: usize,
    shown: String,
}

/// Sibling order: plain files first, then directories, each by name.
///
/// Listing files first means a directory's own files immediately follow it in
/// the walk, before any of its subtrees.
fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Whether a directory entry named like the marker exists.
///
/// Presence is decided without following symlinks, so a marker that is listed
/// but unreadable (a dangling link, a file removed mid-scan) surfaces as a read
/// error instead of leaving the directory unmarked. A directory (or a link to
/// one) with the marker's name does not count.
fn has_marker(marker_path: &Path) -> Result<bool> {
    match fs::symlink_metadata(marker_path) {
        Ok(meta) if meta.file_type().is_symlink() => Ok(!marker_path.is_dir()),
        Ok(meta) => Ok(!meta.is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(RoleReportError::FileRead {
            path: marker_path.to_path_buf(),
            source,
        }),
    }
}

/// Read a whole file as UTF-8 text.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read and `Decode` if it is not UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| RoleReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| RoleReportError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Return the file's full text if its first line, trimmed, starts with `marker`.
///
/// # Errors
/// Returns an error if the file cannot be read as UTF-8 text. The whole file is
/// decoded even when the first line does not match.
pub fn content_if_marked(path: &Path, marker: &str) -> Result<Option<String>> {
    let content = read_text(path)?;
    let marked = content
        .lines()
        .next()
        .is_some_and(|first| first.trim().starts_with(marker));
    Ok(marked.then_some(content))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
