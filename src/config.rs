use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::UnitSystem;

fn default_units() -> UnitSystem {
    UnitSystem::Imperial
}

/// Display preferences consumed by distance formatting. The unit system is
/// user configuration, never decided at a call site.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_units")]
    pub units: UnitSystem,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            units: default_units(),
        }
    }
}

impl DisplayConfig {
    /// Load the first parseable config file from the search paths, or
    /// `None` when no file exists. Parse failures warn and fall through to
    /// the next candidate.
    pub fn load() -> Option<Self> {
        for path in config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse display config")
    }
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("holeview.toml"));
    paths.push(PathBuf::from(".holeview.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("holeview").join("config.toml"));
        paths.push(config_dir.join("holeview.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".holeview.toml"));
        paths.push(home.join(".config").join("holeview").join("config.toml"));
    }

    paths
}
