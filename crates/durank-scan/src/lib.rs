//! Directory walking engine for durank.
//!
//! This crate walks a directory tree with an explicit stack and feeds every
//! file it finds into a bounded [`RankedTopSet`], keeping a running total of
//! bytes measured along the way.
//!
//! # Overview
//!
//! - **Iterative traversal** with no recursion, so depth is unbounded
//! - **Best-effort results**: unreadable directories and vanished files
//!   become warnings instead of errors
//! - **Pluggable filesystem** through the [`FileSystem`] trait
//!
//! # Example
//!
//! ```rust,no_run
//! use durank_scan::{ScanConfig, TreeWalker};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let result = TreeWalker::new(config).scan().unwrap();
//!
//! for (i, entry) in result.entries().iter().enumerate() {
//!     println!("#{} {} bytes {}", i + 1, entry.size(), entry.path().display());
//! }
//! println!("Total size: {} bytes", result.total_size());
//! ```

mod fs;
mod progress;
mod walker;

pub use fs::{FileSystem, StdFileSystem};
pub use progress::ScanProgress;
pub use walker::{ScanResult, TreeWalker};

// Re-export core types for convenience
pub use durank_core::{
    Entry, RankedTopSet, ScanConfig, ScanError, ScanSummary, ScanWarning, WarningKind,
};
