//! Navigation: turning a route path into something a tab can host.
//!
//! The workspace never decides what a path means. A [`NavigationResolver`]
//! maps the path to a title, presentation hints and a content handle, or to
//! nothing for paths it does not know, in which case no tab is opened.

mod route_table;

pub use route_table::{PracticeModule, RouteTable, ViewRef};

use crate::workspace::{OpenOutcome, TabDescriptor, WorkspaceManager};
use practice_desk_config::IconRef;

/// A path resolved into everything needed to open a tab for it
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedView<C> {
    pub path: String,
    pub title: String,
    pub icon: Option<IconRef>,
    pub color: Option<String>,
    pub closable: bool,
    pub content: C,
}

impl<C> ResolvedView<C> {
    pub fn into_descriptor(self) -> TabDescriptor<C> {
        let mut descriptor = TabDescriptor::new(self.path, self.title, self.content);
        descriptor.icon = self.icon;
        descriptor.color = self.color;
        descriptor.closable = self.closable;
        descriptor
    }
}

/// Resolves route paths into tab content
pub trait NavigationResolver<C> {
    /// `None` for paths that should not open a tab
    fn resolve(&self, path: &str) -> Option<ResolvedView<C>>;
}

impl<C> WorkspaceManager<C> {
    /// Resolve `path` and open the resulting view.
    ///
    /// Returns `None` without touching the workspace when the resolver does
    /// not know the path.
    pub fn open_path<R>(&mut self, resolver: &R, path: &str) -> Option<OpenOutcome>
    where
        R: NavigationResolver<C> + ?Sized,
    {
        match resolver.resolve(path) {
            Some(view) => Some(self.open(view.into_descriptor())),
            None => {
                log::debug!("No view for path {:?}, nothing opened", path);
                None
            }
        }
    }
}
