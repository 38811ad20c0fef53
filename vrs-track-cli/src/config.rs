//! Configuration file loading
//!
//! Everything the tool needs fits on the command line, but recurring queries
//! are nicer kept in a small TOML file. Explicit command-line flags always
//! win over config values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Target Mode S ICAO transponder code
    pub icao: Option<String>,
    /// Directory containing VRS snapshot files
    pub path: Option<PathBuf>,
    /// Output GPX filename
    pub gpxfilename: Option<PathBuf>,
    /// Sort track points by timestamp before writing
    #[serde(default)]
    pub sort_by_time: bool,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
