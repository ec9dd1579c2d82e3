//! Filesystem entries produced during traversal.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::{format_size, serialize_path_lossy};

/// A single file or directory encountered while walking a tree.
///
/// Entries are immutable once built. The path is relative to the scan root:
/// direct children of the root carry their bare name, deeper entries are
/// joined onto their parent's path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(serialize_with = "serialize_path_lossy")]
    path: PathBuf,
    depth: u32,
    size: u64,
    is_file: bool,
}

impl Entry {
    /// Create a directory entry. Directories carry no size of their own.
    pub fn directory(path: impl Into<PathBuf>, depth: u32) -> Self {
        Self {
            path: path.into(),
            depth,
            size: 0,
            is_file: false,
        }
    }

    /// Create a file entry with a measured size.
    pub fn file(path: impl Into<PathBuf>, depth: u32, size: u64) -> Self {
        Self {
            path: path.into(),
            depth,
            size,
            is_file: true,
        }
    }

    /// Root-relative path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Traversal depth from the root (root = 0).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Size in bytes; always 0 for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    pub fn is_dir(&self) -> bool {
        !self.is_file
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({} {})", self.path.display(), format_size(self.size))
    }
}
