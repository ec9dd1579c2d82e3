//! Totals and warnings gathered by a completed scan.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ScanWarning, WarningKind};
use crate::format::serialize_path_lossy;

/// Summary of a finished walk.
///
/// Totals only cover what could be read: skipped subtrees and vanished
/// files make them a lower bound whenever `warnings` is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Root path that was scanned.
    #[serde(serialize_with = "serialize_path_lossy")]
    pub root: PathBuf,
    /// Sum of the sizes of every file that was measured.
    pub total_size: u64,
    /// Number of files measured.
    pub files_scanned: u64,
    /// Number of directories discovered below the root.
    pub dirs_scanned: u64,
    /// Deepest level at which a file or directory was found.
    pub max_depth: u32,
    /// Wall-clock duration of the walk.
    pub scan_duration: Duration,
    /// Warnings encountered during the walk, in discovery order.
    pub warnings: Vec<ScanWarning>,
}

impl ScanSummary {
    /// Create an empty summary for `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            total_size: 0,
            files_scanned: 0,
            dirs_scanned: 0,
            max_depth: 0,
            scan_duration: Duration::ZERO,
            warnings: Vec::new(),
        }
    }

    /// Check if there were any warnings during scanning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Count warnings of one kind.
    pub fn warning_count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }
}
