use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::normalize_extension;
use crate::error::{Result, RoleReportError};
use crate::output::normalize_separators;

/// Decides whether a file inside a marked directory gets a file record.
pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Decides whether traversal descends into a directory.
///
/// `relative` is the directory's path relative to the scan root. The root
/// itself is never passed to this predicate.
pub trait DescentFilter {
    fn should_descend(&self, relative: &Path) -> bool;
}

/// Matches files whose name ends with `.<ext>` for one of the configured extensions.
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    #[must_use]
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|e| normalize_extension(e.as_ref()))
            .filter(|e| !e.is_empty())
            .map(|e| format!(".{e}"))
            .collect();
        Self { suffixes }
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}

/// Prunes directories by name prefix or by root-relative glob pattern.
pub struct PrunePolicy {
    prefixes: Vec<String>,
    exclude: GlobSet,
}

impl PrunePolicy {
    /// Create a policy from name prefixes and exclude globs.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(prefixes: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| RoleReportError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .map_err(|e| RoleReportError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { prefixes, exclude })
    }

    fn has_reserved_prefix(&self, relative: &Path) -> bool {
        relative
            .file_name()
            .map(|n| n.to_string_lossy())
            .is_some_and(|name| self.prefixes.iter().any(|p| name.starts_with(p.as_str())))
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }
        let normalized = normalize_separators(&relative.to_string_lossy());
        self.exclude.is_match(normalized)
    }
}

impl DescentFilter for PrunePolicy {
    fn should_descend(&self, relative: &Path) -> bool {
        !self.has_reserved_prefix(relative) && !self.is_excluded(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
