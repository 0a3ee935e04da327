//! Workspace tab types.

use practice_desk_config::{IconRef, normalize_route_path};
use std::fmt;

/// Identifier of an open tab, unique within a workspace.
///
/// Normally derived from the tab's route so that opening the same route twice
/// finds the existing tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(String);

impl TabId {
    /// Use `id` verbatim
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the id from a route path (`Patients/` and `/patients` are the same tab)
    pub fn from_path(path: &str) -> Self {
        Self(normalize_route_path(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TabId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Request to open a tab.
///
/// `content` is whatever the rendering layer needs to mount the view; the
/// workspace stores it and hands it back without looking inside.
#[derive(Debug, Clone)]
pub struct TabDescriptor<C> {
    pub id: TabId,
    pub title: String,
    pub path: String,
    pub icon: Option<IconRef>,
    pub color: Option<String>,
    pub content: C,
    pub closable: bool,
}

impl<C> TabDescriptor<C> {
    /// Descriptor for `path` with its id derived from the path
    pub fn new(path: impl Into<String>, title: impl Into<String>, content: C) -> Self {
        let path = path.into();
        Self {
            id: TabId::from_path(&path),
            title: title.into(),
            path,
            icon: None,
            color: None,
            content,
            closable: true,
        }
    }

    pub fn with_id(mut self, id: TabId) -> Self {
        self.id = id;
        self
    }

    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

/// An open workspace tab
#[derive(Debug, Clone)]
pub struct Tab<C> {
    id: TabId,
    title: String,
    path: String,
    icon: Option<IconRef>,
    color: Option<String>,
    content: C,
    closable: bool,
}

impl<C> Tab<C> {
    pub fn id(&self) -> &TabId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn icon(&self) -> Option<&IconRef> {
        self.icon.as_ref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Opaque view payload supplied when the tab was opened
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Whether the UI should offer a close button. The workspace itself
    /// closes any tab it is asked to.
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    /// Take back the payload of a tab that has left the workspace
    pub fn into_content(self) -> C {
        self.content
    }
}

impl<C> From<TabDescriptor<C>> for Tab<C> {
    fn from(descriptor: TabDescriptor<C>) -> Self {
        Self {
            id: descriptor.id,
            title: descriptor.title,
            path: descriptor.path,
            icon: descriptor.icon,
            color: descriptor.color,
            content: descriptor.content,
            closable: descriptor.closable,
        }
    }
}
