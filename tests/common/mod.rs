//! Shared integration test helpers for practice-desk.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{open_ids, ids, active};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use practice_desk::config::{CapacityBounds, WorkspaceConfig};
use practice_desk::{TabDescriptor, TabId, WorkspaceManager};

/// Workspace with capacity `max_tabs` under the standard bounds
pub fn workspace(max_tabs: usize) -> WorkspaceManager<String> {
    let config = WorkspaceConfig {
        max_tabs,
        ..WorkspaceConfig::default()
    };
    WorkspaceManager::new(&config)
}

/// Workspace whose bounds allow any capacity from 1 to 50
pub fn small_workspace(max_tabs: usize) -> WorkspaceManager<String> {
    let config = WorkspaceConfig {
        max_tabs,
        ..WorkspaceConfig::default()
    };
    WorkspaceManager::with_bounds(&config, CapacityBounds::new(1, 50))
}

/// Descriptor whose id is `id` verbatim and whose content is `content:<id>`
pub fn tab(id: &str) -> TabDescriptor<String> {
    TabDescriptor::new(format!("/{id}"), id.to_uppercase(), format!("content:{id}"))
        .with_id(TabId::new(id))
}

/// Open each id in order
pub fn open_ids(mgr: &mut WorkspaceManager<String>, ids: &[&str]) {
    for id in ids {
        mgr.open(tab(id));
    }
}

/// Open tabs `t1..=tn`
pub fn open_numbered(mgr: &mut WorkspaceManager<String>, n: usize) {
    for i in 1..=n {
        mgr.open(tab(&format!("t{i}")));
    }
}

/// Ids of open tabs, oldest first
pub fn ids(mgr: &WorkspaceManager<String>) -> Vec<String> {
    mgr.tabs().iter().map(|t| t.id().to_string()).collect()
}

pub fn active(mgr: &WorkspaceManager<String>) -> Option<String> {
    mgr.active_tab_id().map(|id| id.to_string())
}
