mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            layout: Layout::default(),
            verify: VerifyConfig::default(),
            gantt: GanttConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file when it exists, fall back to defaults otherwise. The
    /// result is validated either way.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            debug!("Loading config from {}", path.display());
            Config::load(path)?
        } else {
            debug!("No config at {}, using defaults", path.display());
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Sizes must be strictly positive, offsets may be zero
        for (name, value) in self.layout.lengths() {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidLayout { name, value });
            }
        }
        for (name, value) in self.layout.offsets() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidLayout { name, value });
            }
        }
        Ok(())
    }
}
