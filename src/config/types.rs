//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::infrastructure::IgnoreExclusion;

use super::loader::{self, ConfigWarning};

/// Client-side settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Working-tree root; marker paths and server paths resolve under it
    pub local_dir: PathBuf,

    /// Where annotate spools are created
    pub temp_dir: PathBuf,

    /// Gitignore-style patterns for files that must never be touched
    pub ignore: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            local_dir: PathBuf::from("."),
            temp_dir: std::env::temp_dir(),
            ignore: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, project config, user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_or_default(explicit)
    }

    /// Exclusion filter rooted at `local_dir`
    pub fn exclusion(&self) -> Result<IgnoreExclusion, ConfigError> {
        IgnoreExclusion::from_patterns(&self.local_dir, &self.ignore)
    }
}
