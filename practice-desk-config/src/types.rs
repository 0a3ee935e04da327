//! Small enum types shared by the config structs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Logging
// ============================================================================

/// Log level for the application log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LogLevel::Off => "Off",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// All available levels for UI iteration
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::all()
            .iter()
            .copied()
            .find(|level| level.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown log level '{s}' (expected off, error, warn, info, debug or trace)")
            })
    }
}

// ============================================================================
// Icons
// ============================================================================

/// Icon shown next to a menu entry or tab title.
///
/// Stored in YAML as a plain string; names that are not one of the built-in
/// practice icons are kept verbatim as [`IconRef::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconRef {
    Dashboard,
    Patients,
    Inventory,
    PurchaseOrders,
    Staff,
    Cash,
    Reports,
    Settings,
    Custom(String),
}

impl IconRef {
    /// Identifier used in config files
    pub fn name(&self) -> &str {
        match self {
            IconRef::Dashboard => "dashboard",
            IconRef::Patients => "patients",
            IconRef::Inventory => "inventory",
            IconRef::PurchaseOrders => "purchase_orders",
            IconRef::Staff => "staff",
            IconRef::Cash => "cash",
            IconRef::Reports => "reports",
            IconRef::Settings => "settings",
            IconRef::Custom(name) => name,
        }
    }
}

impl From<String> for IconRef {
    fn from(name: String) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dashboard" => IconRef::Dashboard,
            "patients" => IconRef::Patients,
            "inventory" => IconRef::Inventory,
            "purchase_orders" => IconRef::PurchaseOrders,
            "staff" => IconRef::Staff,
            "cash" => IconRef::Cash,
            "reports" => IconRef::Reports,
            "settings" => IconRef::Settings,
            _ => IconRef::Custom(name),
        }
    }
}

impl From<IconRef> for String {
    fn from(icon: IconRef) -> Self {
        match icon {
            IconRef::Custom(name) => name,
            other => other.name().to_string(),
        }
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
