//! Config persistence and path resolution for `Config`.
//!
//! Covers:
//! - `load` / `load_from` / `read_from` / `save_to` (YAML file I/O with atomic write)
//! - Platform config path helpers (`config_dir`, `config_path`)
//! - The `PRACTICE_DESK_MAX_TABS` environment override

use crate::capacity::CapacityBounds;
use crate::config::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `workspace.max_tabs` after the file is read.
pub const MAX_TABS_ENV_VAR: &str = "PRACTICE_DESK_MAX_TABS";

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `config_path`.
    ///
    /// A missing file is replaced by the defaults, which are written back so
    /// the user has something to edit.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        log::info!("Config path: {:?}", config_path);

        let mut config = if config_path.exists() {
            Self::read_from(config_path)?
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save_to(config_path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            config
        };

        config.apply_max_tabs_override(std::env::var(MAX_TABS_ENV_VAR).ok().as_deref());
        Ok(config)
    }

    /// Read `config_path` without side effects.
    ///
    /// A missing file yields the defaults but is not created, and the
    /// environment override is not applied.
    pub fn read_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            log::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }
        log::info!("Loading existing config from {:?}", config_path);
        let contents = fs::read_to_string(config_path)?;
        Self::from_yaml_str(&contents)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `config_path`
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Write to a temp file then rename so a crash never leaves half a file
        let temp_path = config_path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, config_path)?;

        log::info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// Apply a `max_tabs` override given as text, clamped like any other
    /// capacity input. `None` leaves the config untouched.
    pub fn apply_max_tabs_override(&mut self, value: Option<&str>) {
        if let Some(raw) = value {
            let max_tabs = CapacityBounds::STANDARD.parse(raw);
            log::info!(
                "max_tabs overridden: {} -> {}",
                self.workspace.max_tabs,
                max_tabs
            );
            self.workspace.max_tabs = max_tabs;
        }
    }

    /// Directory holding `config.yaml`
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("practice-desk")
    }

    /// Full path of the config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_clamped() {
        let mut config = Config::default();
        config.apply_max_tabs_override(Some("99"));
        assert_eq!(config.workspace.max_tabs, 50);
        config.apply_max_tabs_override(Some("lots"));
        assert_eq!(config.workspace.max_tabs, 5);
    }

    #[test]
    fn no_override_keeps_value() {
        let mut config = Config::default();
        config.apply_max_tabs_override(None);
        assert_eq!(config.workspace.max_tabs, 15);
    }

    #[test]
    fn config_path_ends_with_yaml_file() {
        let path = Config::config_path();
        assert!(path.ends_with("practice-desk/config.yaml"));
    }
}
