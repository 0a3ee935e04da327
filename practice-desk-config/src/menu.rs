//! Navigation menu entries.

use crate::types::IconRef;
use serde::{Deserialize, Serialize};

/// One navigable destination in the dashboard menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Route path, e.g. `/patients`
    pub path: String,
    /// Label used for the menu item and for tabs opened from it
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    /// Accent color hint, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether tabs opened from this entry offer a close button
    #[serde(default = "crate::defaults::bool_true")]
    pub closable: bool,
}

impl MenuEntry {
    pub fn new(path: impl Into<String>, title: impl Into<String>, icon: IconRef) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            icon: Some(icon),
            color: None,
            closable: true,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Canonical form of this entry's path
    pub fn route(&self) -> String {
        normalize_route_path(&self.path)
    }
}

/// Canonical route form: lower-case, a single leading `/`, no empty or
/// trailing segments. The empty path and `/` both map to `/`.
pub fn normalize_route_path(path: &str) -> String {
    let segments: Vec<String> = path
        .trim()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_lowercase())
        .collect();
    format!("/{}", segments.join("/"))
}
