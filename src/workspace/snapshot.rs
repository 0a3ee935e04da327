//! Content-free view of a workspace for display and cross-thread reads.

use super::manager::WorkspaceManager;
use super::notice::{CapacityNotice, CapacityStatus};
use super::tab::TabId;
use practice_desk_config::IconRef;

/// Tab metadata without the content handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSummary {
    pub id: TabId,
    pub title: String,
    pub path: String,
    pub icon: Option<IconRef>,
    pub color: Option<String>,
    pub closable: bool,
    pub active: bool,
}

/// Point-in-time copy of a workspace's tab bar state
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceSnapshot {
    /// Open tabs, oldest first
    pub tabs: Vec<TabSummary>,
    pub active: Option<TabId>,
    pub capacity: usize,
    pub status: CapacityStatus,
    pub notice: Option<CapacityNotice>,
}

impl WorkspaceSnapshot {
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_near_capacity(&self) -> bool {
        self.status == CapacityStatus::Near
    }

    pub fn is_at_capacity(&self) -> bool {
        self.status == CapacityStatus::Full
    }
}

impl<C> WorkspaceManager<C> {
    /// Copy out everything but the content handles
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        let active = self.active_tab_id().cloned();
        let tabs = self
            .tabs()
            .iter()
            .map(|tab| TabSummary {
                id: tab.id().clone(),
                title: tab.title().to_string(),
                path: tab.path().to_string(),
                icon: tab.icon().cloned(),
                color: tab.color().map(str::to_string),
                closable: tab.is_closable(),
                active: active.as_ref() == Some(tab.id()),
            })
            .collect();

        WorkspaceSnapshot {
            tabs,
            active,
            capacity: self.capacity(),
            status: self.capacity_status(),
            notice: self.capacity_notice(),
        }
    }
}
