//! Configuration management for the DroneCover CLI.

use anyhow::{Context, Result};
use dronecover::prelude::EvolutionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "dronecover.toml";

/// DroneCover project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub evolution: EvolutionConfig,
    #[serde(default)]
    pub mission: MissionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Coverage radius used when `--radius` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Target count used when neither `--targets` nor `--count` is given.
    /// Unset draws a count in [30, 100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_count: Option<usize>,
    /// Map scale for SVG export, pixels per field unit.
    #[serde(default = "default_map_scale")]
    pub map_scale: f64,
}

fn default_map_scale() -> f64 { 5.0 }

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            radius: None,
            target_count: None,
            map_scale: default_map_scale(),
        }
    }
}

impl Config {
    /// Load config from dronecover.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "using config file");
                Self::load_from(&path)
            }
            None => {
                debug!("no {CONFIG_FILE} found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find dronecover.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
