//! Filesystem access used by the walker.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// The three filesystem queries a walk needs.
///
/// Implemented for the real filesystem by [`StdFileSystem`]; tests swap in
/// fakes to reproduce permission failures and files that vanish mid-walk.
pub trait FileSystem {
    /// Check if `path` is a directory, following symbolic links.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the names of the immediate children of a directory.
    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Size of a file in bytes, following symbolic links.
    ///
    /// Fails with [`io::ErrorKind::NotFound`] if the file no longer exists.
    fn file_size(&self, path: &Path) -> io::Result<u64>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>> {
        (**self).list_children(path)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        (**self).file_size(path)
    }
}

/// The host filesystem via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        fs::metadata(path).map(|m| m.len())
    }
}
