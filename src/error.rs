use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoleReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to traverse directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to write report: {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl RoleReportError {
    /// Short category label used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Decode { .. } => "Decode",
            Self::Walk(_) => "Walk",
            Self::OutputWrite { .. } => "Write",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Root cause of the error, if it wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } | Self::OutputWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::Decode { source, .. } => Some(source.utf8_error().to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint shown below the error, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Decode { .. } => Some(
                "remove the file's extension from `scanner.extensions` or convert it to UTF-8",
            ),
            Self::InvalidPattern { .. } => {
                Some("check the `scanner.exclude` glob syntax, e.g. \"**/node_modules\"")
            }
            Self::TomlParse(_) => Some("run `role-report init` to generate a valid template"),
            Self::OutputWrite { .. } => {
                Some("check that the output directory exists and is writable")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RoleReportError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
