//! Scan progress tracking.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use durank_core::{ScanSummary, ScanWarning};

/// Point-in-time counters handed to progress callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanProgress {
    pub files_scanned: u64,
    pub dirs_scanned: u64,
    pub bytes_scanned: u64,
    pub warnings_count: u64,
    pub elapsed: Duration,
}

impl ScanProgress {
    /// Files measured per second of wall-clock time, 0 before any time has passed.
    pub fn files_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.files_scanned as f64 / secs
        } else {
            0.0
        }
    }
}

/// Running counters owned by a single walk.
#[derive(Debug)]
pub(crate) struct ProgressTracker {
    start_time: Instant,
    files_scanned: u64,
    dirs_scanned: u64,
    bytes_scanned: u64,
    max_depth: u32,
    warnings: Vec<ScanWarning>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            files_scanned: 0,
            dirs_scanned: 0,
            bytes_scanned: 0,
            max_depth: 0,
            warnings: Vec::new(),
        }
    }

    /// Record a measured file. Returns the number of files seen so far.
    pub fn record_file(&mut self, size: u64, depth: u32) -> u64 {
        self.files_scanned += 1;
        self.bytes_scanned += size;
        self.max_depth = self.max_depth.max(depth);
        self.files_scanned
    }

    pub fn record_dir(&mut self, depth: u32) {
        self.dirs_scanned += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn record_warning(&mut self, warning: ScanWarning) {
        tracing::warn!(
            path = %warning.path.display(),
            kind = ?warning.kind,
            "{}",
            warning.message
        );
        self.warnings.push(warning);
    }

    pub fn snapshot(&self) -> ScanProgress {
        ScanProgress {
            files_scanned: self.files_scanned,
            dirs_scanned: self.dirs_scanned,
            bytes_scanned: self.bytes_scanned,
            warnings_count: self.warnings.len() as u64,
            elapsed: self.start_time.elapsed(),
        }
    }

    /// Close out the walk and produce its summary.
    pub fn finish(self, root: impl Into<PathBuf>) -> ScanSummary {
        ScanSummary {
            root: root.into(),
            total_size: self.bytes_scanned,
            files_scanned: self.files_scanned,
            dirs_scanned: self.dirs_scanned,
            max_depth: self.max_depth,
            scan_duration: self.start_time.elapsed(),
            warnings: self.warnings,
        }
    }
}
