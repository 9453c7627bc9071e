//! Scan results and their plain-text rendering.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, RoleReportError};

/// One finding of a scan, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanEntry {
    /// A directory carrying a marker file.
    Directory { path: String, role: String },
    /// An eligible file inside a marked directory. `content` is set only
    /// when the file opts in via its first line.
    File {
        path: String,
        content: Option<String>,
    },
}

impl ScanEntry {
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    #[must_use]
    pub const fn has_content(&self) -> bool {
        matches!(self, Self::File { content: Some(_), .. })
    }
}

impl fmt::Display for ScanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory { path, role } => write!(f, "{path} : {role}"),
            Self::File {
                path,
                content: Some(content),
            } => write!(f, "{path}\n\n{content}\n"),
            Self::File {
                path,
                content: None,
            } => f.write_str(path),
        }
    }
}

/// Ordered collection of scan entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    entries: Vec<ScanEntry>,
}

impl Report {
    #[must_use]
    pub const fn new(entries: Vec<ScanEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ScanEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn directory_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_directory()).count()
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries.len() - self.directory_count()
    }

    #[must_use]
    pub fn embedded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.has_content()).count()
    }

    /// Entry renderings joined by single newlines.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Create or truncate `path` and write `content` to it.
///
/// # Errors
/// Returns `RoleReportError::OutputWrite` if the file cannot be written.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| RoleReportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
