use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::mode::Mode;

/// On-disk settings; everything optional, command-line flags win.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// "sha224" or "sha256"; used when a command omits --mode.
    pub default_mode: Option<String>,
    /// Emit JSON digest reports by default.
    pub json: Option<bool>,
}

impl Settings {
    /// Mode named by the config file, if any.
    pub fn mode(&self) -> Result<Option<Mode>> {
        match &self.default_mode {
            Some(name) => {
                let mode = name
                    .parse::<Mode>()
                    .with_context(|| format!("Config default_mode '{}'", name))?;
                Ok(Some(mode))
            }
            None => Ok(None),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.sha2ref\config.toml on Windows; ~/.sha2ref/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".sha2ref").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Load settings from `path`; a missing file just means defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Parse config {}", path.display()))
}
