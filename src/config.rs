//! Engine configuration loaded from TOML.
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! ```toml
//! width = 60
//! height = 40
//! padding = 0
//! edit_policy = "rebaseline"
//! ```

use std::path::Path;

use serde::Deserialize;

/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 4096;

/// Largest accepted load padding.
pub const MAX_PADDING: usize = 64;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("failed to parse config TOML: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    /// A value is outside its accepted range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Whether manual edits also update the snapshot that `reset` restores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// Edits are written to both the live grid and the reset snapshot.
    #[default]
    Rebaseline,
    /// Edits touch only the live grid; `reset` undoes them.
    LiveOnly,
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid width used at construction.
    pub width: usize,
    /// Grid height used at construction.
    pub height: usize,
    /// Empty border added on every side of loaded text.
    pub padding: usize,
    pub edit_policy: EditPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 40,
            padding: 0,
            edit_policy: EditPolicy::Rebaseline,
        }
    }
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that dimensions and padding are within range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between 1 and {MAX_DIMENSION}, got {value}"
                )));
            }
        }
        if self.padding > MAX_PADDING {
            return Err(ConfigError::Invalid(format!(
                "padding must be at most {MAX_PADDING}, got {}",
                self.padding
            )));
        }
        Ok(())
    }
}
