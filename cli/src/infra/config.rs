//! Config file loading.

use std::path::PathBuf;

use crate::domain::{ConfigError, FileConfig};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CQ5_PASSWD_CONFIG";

/// Reads the optional YAML config file.
pub struct YamlConfigStore {
    path: Option<PathBuf>,
    required: bool,
}

impl YamlConfigStore {
    /// Resolve the config path: `explicit`, then `$CQ5_PASSWD_CONFIG`, then
    /// `~/.cq5-passwd/config.yaml`. Only the last may be absent.
    #[must_use]
    pub fn locate(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return Self {
                path: Some(path),
                required: true,
            };
        }
        if let Ok(val) = std::env::var(CONFIG_ENV)
            && !val.is_empty()
        {
            return Self {
                path: Some(PathBuf::from(val)),
                required: true,
            };
        }
        Self {
            path: dirs::home_dir().map(|home| home.join(".cq5-passwd").join("config.yaml")),
            required: false,
        }
    }

    /// Load the file, or defaults when an optional file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, or any file cannot be
    /// read or parsed.
    pub fn load(&self) -> Result<FileConfig, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(FileConfig::default());
        };
        if !self.required && !path.exists() {
            return Ok(FileConfig::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        if content.trim().is_empty() {
            return Ok(FileConfig::default());
        }
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
