//! Explicit-stack directory walker.

use std::io;
use std::path::{Path, PathBuf};

use durank_core::{Entry, RankedTopSet, ScanConfig, ScanError, ScanSummary, ScanWarning};

use crate::fs::{FileSystem, StdFileSystem};
use crate::progress::{ProgressTracker, ScanProgress};

/// Emit a progress event every this many files.
const PROGRESS_INTERVAL: u64 = 1000;

/// Ranking and totals produced by [`TreeWalker::scan`].
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// The largest files found, largest first.
    pub ranked: RankedTopSet,
    /// Totals and warnings for the walk.
    pub summary: ScanSummary,
}

impl ScanResult {
    /// Total bytes across all measured files.
    pub fn total_size(&self) -> u64 {
        self.summary.total_size
    }

    /// The ranked entries, largest first.
    pub fn entries(&self) -> &[Entry] {
        self.ranked.entries()
    }
}

/// Depth-first walker that feeds every file it finds into a [`RankedTopSet`].
///
/// Traversal uses an explicit stack of pending directories, so deep trees
/// never grow the call stack. Errors on individual entries are recorded as
/// warnings and the walk carries on: unreadable directories lose their
/// whole subtree, files that vanish before they can be measured are
/// dropped. Symbolic links to directories are followed without cycle
/// detection, so a link loop will not terminate.
pub struct TreeWalker<F = StdFileSystem> {
    config: ScanConfig,
    fs: F,
}

impl TreeWalker {
    /// Create a walker over the real filesystem.
    pub fn new(config: ScanConfig) -> Self {
        Self::with_fs(config, StdFileSystem)
    }
}

impl<F: FileSystem> TreeWalker<F> {
    /// Create a walker over a custom filesystem.
    pub fn with_fs(config: ScanConfig, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk the configured root into a fresh ranking sized by `top_n`.
    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        let mut ranked = RankedTopSet::new(self.config.top_n);
        let summary = self.walk(&mut ranked)?;
        Ok(ScanResult { ranked, summary })
    }

    /// Walk the configured root, offering every file to `ranked`.
    ///
    /// Fails only if the root is not a directory, in which case nothing is
    /// visited.
    pub fn walk(&self, ranked: &mut RankedTopSet) -> Result<ScanSummary, ScanError> {
        self.walk_with_progress(ranked, |_| {})
    }

    /// Like [`walk`](Self::walk), calling `on_progress` every
    /// thousand files measured.
    pub fn walk_with_progress(
        &self,
        ranked: &mut RankedTopSet,
        mut on_progress: impl FnMut(&ScanProgress),
    ) -> Result<ScanSummary, ScanError> {
        let root = &self.config.root;
        if !self.fs.is_dir(root) {
            return Err(ScanError::NotADirectory { path: root.clone() });
        }

        let mut tracker = ProgressTracker::new();
        let mut pending = vec![Entry::directory(PathBuf::new(), 0)];

        while let Some(dir) = pending.pop() {
            let location = self.resolve(dir.path());
            tracing::debug!(path = %location.display(), depth = dir.depth(), "listing directory");

            let names = match self.fs.list_children(&location) {
                Ok(names) => names,
                Err(err) => {
                    let path = self.display_path(&dir);
                    let warning = if err.kind() == io::ErrorKind::PermissionDenied {
                        ScanWarning::permission_denied(path)
                    } else {
                        ScanWarning::read_error(path, &err)
                    };
                    tracker.record_warning(warning);
                    continue;
                }
            };

            let depth = dir.depth() + 1;
            let mut subdirs = Vec::new();

            for name in names {
                if self.config.is_excluded(&name) {
                    tracing::trace!(name = %name.to_string_lossy(), "skipping excluded entry");
                    continue;
                }

                let path = if dir.depth() == 0 {
                    PathBuf::from(name)
                } else {
                    dir.path().join(name)
                };
                let full_path = self.resolve(&path);

                if self.fs.is_dir(&full_path) {
                    tracker.record_dir(depth);
                    subdirs.push(Entry::directory(path, depth));
                    continue;
                }

                match self.fs.file_size(&full_path) {
                    Ok(size) => {
                        let files = tracker.record_file(size, depth);
                        ranked.offer(Entry::file(path, depth, size));

                        if files % PROGRESS_INTERVAL == 0 {
                            let progress = tracker.snapshot();
                            tracing::debug!(
                                files = progress.files_scanned,
                                dirs = progress.dirs_scanned,
                                bytes = progress.bytes_scanned,
                                files_per_sec = progress.files_per_second(),
                                "scan progress"
                            );
                            on_progress(&progress);
                        }
                    }
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {
                        tracker.record_warning(ScanWarning::vanished_file(path));
                    }
                    Err(err) => {
                        tracker.record_warning(ScanWarning::read_error(path, &err));
                    }
                }
            }

            // Reversed so the first listed subdirectory is popped first.
            pending.extend(subdirs.into_iter().rev());
        }

        let summary = tracker.finish(root.clone());
        tracing::info!(
            root = %root.display(),
            files = summary.files_scanned,
            dirs = summary.dirs_scanned,
            bytes = summary.total_size,
            warnings = summary.warnings.len(),
            elapsed_ms = summary.scan_duration.as_millis() as u64,
            "scan complete"
        );

        Ok(summary)
    }

    /// Location of a root-relative path on the filesystem.
    fn resolve(&self, relative: &Path) -> PathBuf {
        if relative.as_os_str().is_empty() {
            self.config.root.clone()
        } else {
            self.config.root.join(relative)
        }
    }

    /// Path to report for a directory: the root itself or its relative path.
    fn display_path(&self, dir: &Entry) -> PathBuf {
        if dir.depth() == 0 {
            self.config.root.clone()
        } else {
            dir.path().to_path_buf()
        }
    }
}
