//! Tabbed workspace for the practice dashboard
//!
//! This module provides the core tab infrastructure including:
//! - `Tab`: One open view (patients list, a purchase order, a report, ...)
//! - `WorkspaceManager`: The bounded, ordered set of open tabs and the active pointer
//! - `TabId`: Identifier of an open tab, derived from its route
//! - `CapacityNotice`: Near-capacity / at-capacity warning for banners

mod manager;
mod notice;
mod snapshot;
mod tab;

pub use manager::{OpenOutcome, WorkspaceManager};
pub use notice::{CapacityNotice, CapacityStatus};
pub use snapshot::{TabSummary, WorkspaceSnapshot};
pub use tab::{Tab, TabDescriptor, TabId};
