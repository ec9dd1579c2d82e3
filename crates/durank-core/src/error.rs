//! Error and warning types for scanning operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::serialize_path_lossy;

/// Errors that stop a scan before it starts.
///
/// Once traversal is underway nothing is fatal; per-entry failures are
/// recorded as [`ScanWarning`]s instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root path is not a directory.
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl From<crate::config::ScanConfigBuilderError> for ScanError {
    fn from(err: crate::config::ScanConfigBuilderError) -> Self {
        Self::InvalidConfig {
            message: err.to_string(),
        }
    }
}

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A directory could not be listed; its subtree was skipped.
    PermissionDenied,
    /// A file disappeared between listing and size lookup.
    VanishedFile,
    /// Any other error reading a file or directory.
    ReadError,
}

/// Non-fatal warning encountered during scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a permission denied warning for a directory that could not be listed.
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!(
                "Skipping {}, the results would be inaccurate",
                path.display()
            ),
            path,
            kind: WarningKind::PermissionDenied,
        }
    }

    /// Create a warning for a file that vanished before its size was read.
    pub fn vanished_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!(
                "{} vanished before it could be measured, the ranking would be inaccurate",
                path.display()
            ),
            path,
            kind: WarningKind::VanishedFile,
        }
    }

    /// Create a read error warning.
    pub fn read_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("Read error at {}: {error}", path.display()),
            path,
            kind: WarningKind::ReadError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_message() {
        let err = ScanError::NotADirectory {
            path: PathBuf::from("notes.txt"),
        };
        assert_eq!(err.to_string(), "notes.txt is not a directory");
    }

    #[test]
    fn test_scan_warning_creation() {
        let warning = ScanWarning::permission_denied("/test/path");
        assert_eq!(warning.kind, WarningKind::PermissionDenied);
        assert!(warning.message.contains("inaccurate"));

        let warning = ScanWarning::vanished_file("gone.bin");
        assert_eq!(warning.kind, WarningKind::VanishedFile);
        assert_eq!(warning.path, PathBuf::from("gone.bin"));
    }
}
