// Library exports for the practice-desk workspace and its tests
//
// The core is `workspace::WorkspaceManager`, a plain single-owner type.
// Anything that needs to drive one workspace from several threads goes
// through `shared::SharedWorkspace`, which guards it with a
// `parking_lot::Mutex`. There are no global workspaces.

/// Application version (root crate version)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod navigation;
pub mod reports;
pub mod session;
pub mod shared;
pub mod workspace;

// Re-export the config crate so downstream code needs only one dependency
pub use practice_desk_config as config;

pub use navigation::{NavigationResolver, PracticeModule, ResolvedView, RouteTable, ViewRef};
pub use shared::SharedWorkspace;
pub use workspace::{
    CapacityNotice, CapacityStatus, OpenOutcome, Tab, TabDescriptor, TabId, WorkspaceManager,
    WorkspaceSnapshot,
};
