//! Configuration for the line pipeline.
//!
//! [`PipelineConfig`] is a flat record of independent flags plus a nested
//! [`SortConfig`]. It is the record callers persist as a user preference, so
//! it round-trips through serde and tolerates missing fields.
//!
//! # Stage Order
//!
//! The flags only say *whether* a stage runs. The order is fixed by
//! [`run`](crate::run), whatever order the fields were set or serialized in:
//!
//! ```text
//! split -> remove empty -> normalize whitespace -> dedupe -> sort
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lines::{PipelineConfig, SortKind};
//!
//! let config: PipelineConfig = serde_json::from_str(
//!     r#"{ "deduplicate": true, "sort": true, "sort_config": { "type": "length" } }"#,
//! ).unwrap();
//! assert!(config.deduplicate);
//! assert!(!config.remove_empty_lines);
//! assert_eq!(config.sort_config.kind, SortKind::Length);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LinesError;
use crate::sort::SortConfig;
use crate::whitespace::NormalizeOptions;

/// Which pipeline stages run, and how the sort stage orders lines.
///
/// All flags default to `false`, so `PipelineConfig::default()` passes text
/// through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Drop lines that are blank after trimming.
    pub remove_empty_lines: bool,
    /// Strip whitespace on both ends of every line.
    pub trim_both: bool,
    /// Strip leading whitespace of every line.
    pub trim_left: bool,
    /// Strip trailing whitespace of every line.
    pub trim_right: bool,
    /// Replace whitespace runs inside each line with a single space.
    pub compress_spaces: bool,
    /// Keep only the first occurrence of each line.
    pub deduplicate: bool,
    /// Run the sort stage using [`sort_config`](Self::sort_config).
    pub sort: bool,
    /// Comparator settings, consulted only when `sort` is set.
    pub sort_config: SortConfig,
}

impl PipelineConfig {
    /// Whitespace transforms selected by this config.
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            trim_left: self.trim_left,
            trim_right: self.trim_right,
            trim_both: self.trim_both,
            compress_spaces: self.compress_spaces,
        }
    }

    /// Rejects settings that cannot be honoured as written.
    ///
    /// [`run`](crate::run) never calls this; an unusable collation locale
    /// there degrades to the root collation instead of failing.
    pub fn validate(&self) -> Result<(), LinesError> {
        self.sort_config.validate()
    }

    pub fn with_sort(mut self, sort_config: SortConfig) -> Self {
        self.sort = true;
        self.sort_config = sort_config;
        self
    }
}
