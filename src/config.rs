//! Drill configuration — defaults loaded from ~/.chordcall/config.yaml.
//!
//! Command-line flags override anything set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::drill::DEFAULT_MAX_RETRIES;
use crate::speech::SpeechConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Drill configuration loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Mode used when `--mode` is not given.
    #[serde(default = "DrillConfig::default_mode")]
    pub mode: String,
    /// Seconds given to play each chord.
    #[serde(default = "DrillConfig::default_seconds")]
    pub seconds: f64,
    /// Fixed RNG seed. None = fresh entropy each run.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Redraws allowed before a repeated prompt is accepted.
    #[serde(default = "DrillConfig::default_max_retries")]
    pub max_retries: u32,
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// Standard config path (~/.chordcall/config.yaml).
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chordcall").join("config.yaml"))
}

impl DrillConfig {
    fn default_mode() -> String {
        "major".to_string()
    }

    fn default_seconds() -> f64 {
        3.0
    }

    fn default_max_retries() -> u32 {
        DEFAULT_MAX_RETRIES
    }

    /// Load config from the standard path.
    /// Returns None if the file doesn't exist or can't be parsed.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("ignoring config: {e}");
                None
            }
        }
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            mode: Self::default_mode(),
            seconds: Self::default_seconds(),
            seed: None,
            max_retries: Self::default_max_retries(),
            speech: SpeechConfig::default(),
        }
    }
}
