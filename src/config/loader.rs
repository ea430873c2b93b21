//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::types::ClientConfig;

const PROJECT_CONFIG: &str = "cvs-decode.toml";
const USER_CONFIG: &str = "cvs-decode/config.toml";

/// Key present in a config file that no setting reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the key, e.g. `tmp_dir` or `ignore.0`
    pub key: String,
    pub file: PathBuf,
    /// 1-based line where the key's top-level name first appears
    pub line: Option<usize>,
}

/// Parse `path`, reporting keys that were ignored instead of failing
pub fn load_with_warnings(path: &Path) -> Result<(ClientConfig, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path)?;

    let mut ignored = Vec::new();
    let config: ClientConfig =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |key| {
            ignored.push(key.to_string())
        })
        .map_err(|e| ConfigError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = ignored
        .into_iter()
        .map(|key| ConfigWarning {
            line: key_line(&content, &key),
            file: path.to_path_buf(),
            key,
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, project config, user config, or defaults.
///
/// An explicit path must exist; the implicit locations are optional.
pub fn load_or_default(
    explicit: Option<&Path>,
) -> Result<(ClientConfig, Vec<ConfigWarning>), ConfigError> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [
        Some(PathBuf::from(PROJECT_CONFIG)),
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG)),
    ];
    for path in candidates.into_iter().flatten() {
        if path.exists() {
            debug!(path = %path.display(), "loading configuration");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(ClientConfig::default()), Vec::new()))
}

/// Apply environment variable overrides (CVS_DECODE_* prefix)
pub fn with_env_overrides(mut config: ClientConfig) -> ClientConfig {
    if let Some(dir) = non_empty_var("CVS_DECODE_LOCAL_DIR") {
        config.local_dir = PathBuf::from(dir);
    }
    if let Some(dir) = non_empty_var("CVS_DECODE_TEMP_DIR") {
        config.temp_dir = PathBuf::from(dir);
    }
    config
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Line of the first `name =` assignment for the key's top-level name
fn key_line(content: &str, key: &str) -> Option<usize> {
    let name = key.split('.').next().unwrap_or(key);
    content.lines().enumerate().find_map(|(idx, line)| {
        let (lhs, _) = line.split_once('=')?;
        (lhs.trim().trim_matches('"') == name).then_some(idx + 1)
    })
}
