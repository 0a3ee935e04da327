//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on the
//! config structs and by their `Default` impls.

use crate::capacity::{DEFAULT_CAPACITY, DEFAULT_WARNING_THRESHOLD};
use crate::menu::MenuEntry;
use crate::types::{IconRef, LogLevel};

pub fn max_tabs() -> usize {
    DEFAULT_CAPACITY
}

pub fn warning_threshold() -> f64 {
    DEFAULT_WARNING_THRESHOLD
}

pub fn log_level() -> LogLevel {
    LogLevel::Info
}

pub fn bool_true() -> bool {
    true
}

/// Navigation menu shown in the dashboard sidebar.
///
/// The dashboard itself is pinned and cannot be closed by the user.
pub fn menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("/", "Dashboard", IconRef::Dashboard).closable(false),
        MenuEntry::new("/patients", "Patients", IconRef::Patients).with_color("#2e7d32"),
        MenuEntry::new("/inventory", "Inventory", IconRef::Inventory).with_color("#1565c0"),
        MenuEntry::new("/purchase-orders", "Purchase Orders", IconRef::PurchaseOrders)
            .with_color("#6a1b9a"),
        MenuEntry::new("/staff", "Staff", IconRef::Staff).with_color("#ef6c00"),
        MenuEntry::new("/cash", "Cash Transactions", IconRef::Cash).with_color("#00838f"),
        MenuEntry::new("/reports", "Reports", IconRef::Reports).with_color("#c62828"),
        MenuEntry::new("/settings", "Settings", IconRef::Settings),
    ]
}
