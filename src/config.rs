//! Simulator configuration.
//!
//! File locations for the switch trace and the speed log. Defaults mirror
//! the embedded target's fixed paths; a JSON config file or CLI flags
//! override them on the host.

use core::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Core simulator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Switch trace to replay (one sample tick per line, header discarded).
    pub input_path: PathBuf,
    /// Speed log to write (one integer per line, header written once).
    pub output_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("switches.txt"),
            output_path: PathBuf::from("motor.txt"),
        }
    }
}

impl SimConfig {
    /// Load configuration from a JSON file. Missing fields fall back to
    /// the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        serde_json::from_str(&text).map_err(ConfigError::Parse)
    }
}

/// Errors from [`SimConfig::load`].
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Read(std::io::Error),
    /// The config file is not valid JSON for this schema.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "read failed: {e}"),
            Self::Parse(e) => write!(f, "parse failed: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
