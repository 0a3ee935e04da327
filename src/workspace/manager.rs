//! Workspace manager coordinating the open tabs of one dashboard

use super::notice::{CapacityNotice, CapacityStatus};
use super::tab::{Tab, TabDescriptor, TabId};
use practice_desk_config::{CapacityBounds, WorkspaceConfig};

/// What `open` did with a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new tab was appended
    Opened,
    /// A tab with the same id was already open and is now active
    Surfaced,
    /// A new tab was appended after evicting the oldest one
    OpenedWithEviction(TabId),
}

/// Manages the open tabs of a single workspace.
///
/// Tabs are kept in opening order: index 0 is the oldest open tab. When the
/// workspace is full, opening a new tab silently evicts the oldest one.
/// Unsaved state in an evicted tab is the caller's concern.
#[derive(Debug)]
pub struct WorkspaceManager<C> {
    /// All open tabs, oldest first
    tabs: Vec<Tab<C>>,
    /// Currently active tab ID
    active_tab_id: Option<TabId>,
    bounds: CapacityBounds,
    max_capacity: usize,
    warning_threshold: f64,
    /// Status after the last mutation, for logging transitions
    last_status: CapacityStatus,
}

impl<C> WorkspaceManager<C> {
    /// Create an empty workspace with the standard capacity bounds
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self::with_bounds(config, CapacityBounds::STANDARD)
    }

    /// Create an empty workspace whose capacity is clamped into `bounds`
    pub fn with_bounds(config: &WorkspaceConfig, bounds: CapacityBounds) -> Self {
        let mut config = config.clone();
        config.normalize(bounds);
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            bounds,
            max_capacity: config.max_tabs,
            warning_threshold: config.warning_threshold,
            last_status: CapacityStatus::Normal,
        }
    }

    /// Open a tab, or surface it if a tab with the same id is already open.
    ///
    /// The opened or surfaced tab always becomes active. A surfaced tab keeps
    /// its original title, content and position; the descriptor is dropped.
    pub fn open(&mut self, descriptor: TabDescriptor<C>) -> OpenOutcome {
        if self.contains(descriptor.id.as_str()) {
            log::debug!("Tab {} already open, switching to it", descriptor.id);
            self.active_tab_id = Some(descriptor.id);
            return OpenOutcome::Surfaced;
        }

        let evicted = if self.tabs.len() >= self.max_capacity {
            let oldest = self.tabs.remove(0);
            log::info!(
                "Workspace full ({} tabs), evicting oldest tab {}",
                self.max_capacity,
                oldest.id()
            );
            Some(oldest.id().clone())
        } else {
            None
        };

        let id = descriptor.id.clone();
        self.tabs.push(Tab::from(descriptor));

        // Always switch to the new tab
        self.active_tab_id = Some(id.clone());

        log::info!("Opened tab {} (total: {})", id, self.tabs.len());
        self.note_status_change();

        match evicted {
            Some(evicted) => OpenOutcome::OpenedWithEviction(evicted),
            None => OpenOutcome::Opened,
        }
    }

    /// Close a tab by ID, returning it. Unknown IDs are ignored.
    ///
    /// If the closed tab was active, the tab that now occupies its index
    /// becomes active, or the one before it if the closed tab was last.
    pub fn close(&mut self, id: &str) -> Option<Tab<C>> {
        let idx = self.index_of(id)?;
        log::info!("Closing tab {} (index {})", id, idx);
        let tab = self.remove_at(idx);
        self.note_status_change();
        Some(tab)
    }

    /// Switch to a tab by ID. Returns false (and changes nothing) if it is not open.
    pub fn set_active(&mut self, id: &str) -> bool {
        match self.tabs.iter().find(|t| t.id().as_str() == id) {
            Some(tab) => {
                self.active_tab_id = Some(tab.id().clone());
                log::debug!("Switched to tab {}", id);
                true
            }
            None => false,
        }
    }

    /// Close the oldest tab, if any
    pub fn close_oldest(&mut self) -> Option<Tab<C>> {
        if self.tabs.is_empty() {
            return None;
        }
        let tab = self.remove_at(0);
        log::info!("Closed oldest tab {}", tab.id());
        self.note_status_change();
        Some(tab)
    }

    /// Close every tab
    pub fn clear(&mut self) {
        log::info!("Clearing workspace ({} tabs)", self.tabs.len());
        self.tabs.clear();
        self.active_tab_id = None;
        self.note_status_change();
    }

    /// Change the capacity, clamped into the workspace bounds, and return
    /// the value actually applied.
    ///
    /// Shrinking below the open count evicts the oldest tabs first. If the
    /// active tab goes with them, the new oldest tab becomes active.
    pub fn set_capacity(&mut self, requested: usize) -> usize {
        let capacity = self.bounds.clamp(requested);
        self.apply_capacity(capacity)
    }

    /// Like `set_capacity`, for free-form input from a settings field
    pub fn set_capacity_from_str(&mut self, input: &str) -> usize {
        let capacity = self.bounds.parse(input);
        self.apply_capacity(capacity)
    }

    fn apply_capacity(&mut self, capacity: usize) -> usize {
        log::info!("Workspace capacity {} -> {}", self.max_capacity, capacity);
        self.max_capacity = capacity;

        if self.tabs.len() > capacity {
            let excess = self.tabs.len() - capacity;
            let evicted: Vec<Tab<C>> = self.tabs.drain(..excess).collect();
            for tab in &evicted {
                log::info!("Evicting tab {} after capacity change", tab.id());
            }
            let active_evicted = self
                .active_tab_id
                .as_ref()
                .is_some_and(|active| evicted.iter().any(|t| t.id() == active));
            if active_evicted {
                self.active_tab_id = self.tabs.first().map(|t| t.id().clone());
            }
        }

        self.note_status_change();
        capacity
    }

    /// Remove the tab at `idx`, re-pointing the active tab if needed
    fn remove_at(&mut self, idx: usize) -> Tab<C> {
        let tab = self.tabs.remove(idx);

        // If we removed the active tab, switch to another
        if self.active_tab_id.as_ref() == Some(tab.id()) {
            self.active_tab_id = if self.tabs.is_empty() {
                None
            } else {
                // Prefer the tab at the same index (or previous if at end)
                let new_idx = idx.min(self.tabs.len() - 1);
                Some(self.tabs[new_idx].id().clone())
            };
        }

        tab
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id().as_str() == id)
    }

    fn note_status_change(&mut self) {
        let status = self.capacity_status();
        if status == self.last_status {
            return;
        }
        match status {
            CapacityStatus::Full => log::warn!(
                "Workspace at capacity ({}/{}); the next new tab evicts the oldest",
                self.tabs.len(),
                self.max_capacity
            ),
            CapacityStatus::Near => log::warn!(
                "Workspace near capacity ({}/{})",
                self.tabs.len(),
                self.max_capacity
            ),
            CapacityStatus::Normal => log::debug!(
                "Workspace back below warning threshold ({}/{})",
                self.tabs.len(),
                self.max_capacity
            ),
        }
        self.last_status = status;
    }

    /// Current maximum number of open tabs
    pub fn capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn bounds(&self) -> CapacityBounds {
        self.bounds
    }

    pub fn warning_threshold(&self) -> f64 {
        self.warning_threshold
    }

    /// Get the number of open tabs
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// All open tabs, oldest first
    pub fn tabs(&self) -> &[Tab<C>] {
        &self.tabs
    }

    /// Get a tab by ID
    pub fn get_tab(&self, id: &str) -> Option<&Tab<C>> {
        self.tabs.iter().find(|t| t.id().as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Get the active tab ID
    pub fn active_tab_id(&self) -> Option<&TabId> {
        self.active_tab_id.as_ref()
    }

    /// Get a reference to the active tab
    pub fn active_tab(&self) -> Option<&Tab<C>> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.get_tab(id.as_str()))
    }

    /// Get index of active tab (0-based)
    pub fn active_index(&self) -> Option<usize> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.index_of(id.as_str()))
    }

    /// Content handle of the active tab, for the rendering layer
    pub fn active_content(&self) -> Option<&C> {
        self.active_tab().map(Tab::content)
    }

    pub fn capacity_status(&self) -> CapacityStatus {
        CapacityStatus::evaluate(self.tabs.len(), self.max_capacity, self.warning_threshold)
    }

    /// At or above the warning threshold, but not yet full
    pub fn is_near_capacity(&self) -> bool {
        self.capacity_status() == CapacityStatus::Near
    }

    pub fn is_at_capacity(&self) -> bool {
        self.tabs.len() >= self.max_capacity
    }

    /// Banner text for the current status, if any
    pub fn capacity_notice(&self) -> Option<CapacityNotice> {
        CapacityNotice::from_counts(self.tabs.len(), self.max_capacity, self.warning_threshold)
    }
}

impl<C> Default for WorkspaceManager<C> {
    fn default() -> Self {
        Self::new(&WorkspaceConfig::default())
    }
}
