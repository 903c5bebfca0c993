//! YAML configuration file support for linekit.
//!
//! A single YAML document holds the pipeline flags and the diff options so a
//! preference store (or a user) can keep them in one place.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "clean word list"
//!
//! pipeline:
//!   remove_empty_lines: true
//!   trim_both: true
//!   compress_spaces: false
//!   deduplicate: true
//!   sort: true
//!   sort_config:
//!     type: "numerical"
//!     direction: "desc"
//!     locale: "zh"
//!
//! diff:
//!   max_lines: 20000
//!   refine_words: true
//! ```

use std::fs;
use std::path::Path;

use lines::PipelineConfig;
use linediff::DiffOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LinekitConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub pipeline: PipelineConfig,

    #[serde(default)]
    pub diff: DiffOptions,
}

impl LinekitConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: LinekitConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML, e.g. for a preference store.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.pipeline
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("pipeline: {err}")))?;

        if self.diff.max_lines == Some(0) {
            return Err(ConfigLoadError::Validation(
                "diff.max_lines must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LinekitConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            pipeline: PipelineConfig::default(),
            diff: DiffOptions::default(),
        }
    }
}
