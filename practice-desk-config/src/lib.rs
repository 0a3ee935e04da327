//! Configuration system for the practice-desk back-office workspace.
//!
//! This crate provides configuration loading, saving, and default values
//! for the dashboard. It includes:
//!
//! - Workspace capacity bounds and clamping of capacity input
//! - The navigation menu that backs tab routing
//! - Log level selection
//! - YAML persistence with atomic writes

pub mod capacity;
pub mod config;
pub mod defaults;
pub mod error;
pub mod menu;
mod persistence;
mod types;

pub use capacity::{
    CapacityBounds, DEFAULT_CAPACITY, DEFAULT_WARNING_THRESHOLD, MAX_CAPACITY, MIN_CAPACITY,
    clamp_capacity, parse_capacity,
};
pub use config::{Config, WorkspaceConfig};
pub use error::ConfigError;
pub use menu::{MenuEntry, normalize_route_path};
pub use persistence::MAX_TABS_ENV_VAR;
pub use types::{IconRef, LogLevel};
