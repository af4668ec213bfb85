//! Configuration module
//!
//! Loads `~/.config/footnote-tip/config.toml`. A missing file yields the
//! defaults; an unreadable or invalid file yields the defaults plus a
//! warning the caller can surface.

mod types;

use std::path::{Path, PathBuf};

use crate::error::FootnoteError;

pub use types::{Config, PageConfig, TooltipConfig};

/// Outcome of loading the configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default location of the config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("footnote-tip").join("config.toml"))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Load the config from an explicit path, falling back to defaults on error
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, FootnoteError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| FootnoteError::InvalidConfig {
        path: path.display().to_string(),
        message: e.message().to_string(),
    })
}
