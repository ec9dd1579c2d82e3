//! Core types for durank.
//!
//! This crate provides the data structures shared by the walker and the
//! command-line front end: filesystem entries, the bounded size ranking,
//! scan configuration, warnings and summaries.

mod config;
mod entry;
mod error;
mod format;
mod ranked;
mod summary;

pub use config::{DEFAULT_TOP_N, ScanConfig, ScanConfigBuilder, ScanConfigBuilderError};
pub use entry::Entry;
pub use error::{ScanError, ScanWarning, WarningKind};
pub use format::{format_size, serialize_path_lossy};
pub use ranked::RankedTopSet;
pub use summary::ScanSummary;
