//! Scan configuration types.

use std::ffi::OsStr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Number of ranked entries kept when none is configured.
pub const DEFAULT_TOP_N: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// Configuration for scanning operations.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to scan.
    pub root: PathBuf,

    /// How many of the largest files to keep.
    #[builder(default = "DEFAULT_TOP_N")]
    #[serde(default = "default_top_n")]
    pub top_n: NonZeroUsize,

    /// Entry names to skip entirely (matched literally against the final
    /// path component, for files and directories alike).
    #[builder(default)]
    #[serde(default)]
    pub excluded_names: Vec<String>,
}

fn default_top_n() -> NonZeroUsize {
    DEFAULT_TOP_N
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a simple config for scanning a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            top_n: DEFAULT_TOP_N,
            excluded_names: Vec::new(),
        }
    }

    /// Check if an entry with this name should be skipped.
    pub fn is_excluded(&self, name: &OsStr) -> bool {
        self.excluded_names.iter().any(|excluded| name == excluded.as_str())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
