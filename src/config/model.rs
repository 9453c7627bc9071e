use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoleReportError};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_MARKER_FILE: &str = "role.txt";
pub const DEFAULT_CONTENT_MARKER: &str = "// role:";
pub const DEFAULT_OUTPUT_PATH: &str = "GptKnowledge.txt";

/// Traversal settings: which directories are visited and which files qualify.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// File whose presence tags a directory with a role description.
    #[serde(default = "default_marker_file")]
    pub marker_file: String,

    /// Extensions eligible for file records (leading dot optional).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory-name prefixes that prune descent.
    #[serde(default = "default_skip_prefixes")]
    pub skip_prefixes: Vec<String>,

    /// Glob patterns (root-relative) for directories to prune.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            marker_file: default_marker_file(),
            extensions: default_extensions(),
            skip_prefixes: default_skip_prefixes(),
            exclude: Vec::new(),
        }
    }
}

/// Content-inclusion settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentConfig {
    /// First-line token that embeds the whole file in the report.
    #[serde(default = "default_content_marker")]
    pub marker: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            marker: default_content_marker(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Report format: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: default_format(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Check field-level constraints that serde cannot express.
    ///
    /// # Errors
    /// Returns `RoleReportError::Config` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if let Some(v) = &self.version
            && v != CONFIG_VERSION
        {
            return Err(RoleReportError::Config(format!(
                "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
            )));
        }

        let marker = self.scanner.marker_file.trim();
        if marker.is_empty() {
            return Err(RoleReportError::Config(
                "scanner.marker_file must not be empty".to_string(),
            ));
        }
        if marker.contains(['/', '\\']) {
            return Err(RoleReportError::Config(format!(
                "scanner.marker_file must be a bare file name, got '{marker}'"
            )));
        }

        if self.scanner.extensions.iter().all(|e| normalize_extension(e).is_empty()) {
            return Err(RoleReportError::Config(
                "scanner.extensions must list at least one extension".to_string(),
            ));
        }

        if self.content.marker.trim().is_empty() {
            return Err(RoleReportError::Config(
                "content.marker must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Strip whitespace and a leading dot: `".js"` and `"js"` both become `"js"`.
#[must_use]
pub fn normalize_extension(ext: &str) -> &str {
    let ext = ext.trim();
    ext.strip_prefix('.').unwrap_or(ext)
}

fn default_marker_file() -> String {
    DEFAULT_MARKER_FILE.to_string()
}

fn default_extensions() -> Vec<String> {
    ["js", "jsx", "mjs", "css"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_skip_prefixes() -> Vec<String> {
    vec![".git".to_string()]
}

fn default_content_marker() -> String {
    DEFAULT_CONTENT_MARKER.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_format() -> String {
    "text".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
