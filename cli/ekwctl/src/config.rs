//! Configuration.
//!
//! Resolved in order, later wins:
//! - built-in defaults
//! - `config.json` in the platform config directory
//! - environment (`EKW_LOG_LEVEL`, `EKW_VERIFY_CHECKSUM`)
//! - command line flags (applied by the commands)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("pl", "ekw", "ekw")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Verify a supplied check digit during `validate`.
    #[serde(default = "default_verify_checksum")]
    pub verify_checksum: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_verify_checksum() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            verify_checksum: default_verify_checksum(),
        }
    }
}

impl Config {
    /// Load config from disk and the environment.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILE);
        Self::load_from(&path)?.with_overrides(|key| std::env::var(key).ok())
    }

    /// Load config from `path`, or return default if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Apply overrides looked up by environment variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("EKW_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(value) = lookup("EKW_VERIFY_CHECKSUM") {
            self.verify_checksum = parse_bool(&value)
                .context("EKW_VERIFY_CHECKSUM must be one of 1, 0, true, false.")?;
        }

        Ok(self)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(anyhow::anyhow!("invalid boolean '{}'", other)),
    }
}
