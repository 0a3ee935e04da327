//! Core configuration structs and their normalisation.

use crate::capacity::{CapacityBounds, DEFAULT_WARNING_THRESHOLD};
use crate::error::ConfigError;
use crate::menu::MenuEntry;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tab workspace settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Maximum number of simultaneously open tabs
    #[serde(
        default = "crate::defaults::max_tabs",
        deserialize_with = "crate::capacity::deserialize_capacity"
    )]
    pub max_tabs: usize,

    /// Fraction of `max_tabs` at which the near-capacity warning shows
    #[serde(default = "crate::defaults::warning_threshold")]
    pub warning_threshold: f64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            max_tabs: crate::defaults::max_tabs(),
            warning_threshold: crate::defaults::warning_threshold(),
        }
    }
}

impl WorkspaceConfig {
    /// Whether `threshold` is usable as a fraction of capacity
    pub fn is_valid_threshold(threshold: f64) -> bool {
        threshold.is_finite() && threshold > 0.0 && threshold <= 1.0
    }

    /// Pull out-of-range values back into their accepted ranges.
    pub fn normalize(&mut self, bounds: CapacityBounds) {
        self.max_tabs = bounds.clamp(self.max_tabs);
        if !Self::is_valid_threshold(self.warning_threshold) {
            log::warn!(
                "warning_threshold {} is not in (0, 1], using {}",
                self.warning_threshold,
                DEFAULT_WARNING_THRESHOLD
            );
            self.warning_threshold = DEFAULT_WARNING_THRESHOLD;
        }
    }
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    #[serde(default = "crate::defaults::log_level")]
    pub log_level: LogLevel,

    /// Dashboard navigation menu, in display order
    #[serde(default = "crate::defaults::menu")]
    pub menu: Vec<MenuEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: WorkspaceConfig::default(),
            log_level: crate::defaults::log_level(),
            menu: crate::defaults::menu(),
        }
    }
}

impl Config {
    /// Parse YAML text and normalise the result.
    ///
    /// Environment overrides are not applied here; see `Config::load_from`.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Config = serde_yaml_ng::from_str(contents)?;
        config.normalize()?;
        Ok(config)
    }

    /// Clamp workspace values and tidy the menu.
    ///
    /// Menu entries without a path or title are rejected; entries whose path
    /// repeats an earlier one are dropped with a warning.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        self.workspace.normalize(CapacityBounds::STANDARD);

        if let Some(bad) = self
            .menu
            .iter()
            .find(|entry| entry.path.trim().is_empty() || entry.title.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "menu entry {:?} needs both a path and a title",
                bad
            )));
        }

        let mut seen = HashSet::new();
        self.menu.retain(|entry| {
            let route = entry.route();
            if seen.insert(route.clone()) {
                true
            } else {
                log::warn!(
                    "Dropping menu entry '{}': path {} is already in the menu",
                    entry.title,
                    route
                );
                false
            }
        });

        Ok(())
    }
}
