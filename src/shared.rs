//! Thread-safe handle to a workspace.
//!
//! `WorkspaceManager` itself is a plain `&mut self` type meant for a single
//! UI event loop. When several surfaces drive the same workspace, they share
//! a `SharedWorkspace`: every call takes the lock, runs to completion, and
//! releases it, so the mutating operations are totally ordered.

use crate::navigation::NavigationResolver;
use crate::workspace::{OpenOutcome, Tab, TabDescriptor, WorkspaceManager, WorkspaceSnapshot};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, lock-guarded workspace handle
pub struct SharedWorkspace<C> {
    inner: Arc<Mutex<WorkspaceManager<C>>>,
}

impl<C> Clone for SharedWorkspace<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> SharedWorkspace<C> {
    pub fn new(manager: WorkspaceManager<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn open(&self, descriptor: TabDescriptor<C>) -> OpenOutcome {
        self.inner.lock().open(descriptor)
    }

    /// Resolve and open `path` under the lock
    pub fn open_path<R>(&self, resolver: &R, path: &str) -> Option<OpenOutcome>
    where
        R: NavigationResolver<C> + ?Sized,
    {
        self.update(|mgr| mgr.open_path(resolver, path))
    }

    pub fn close(&self, id: &str) -> Option<Tab<C>> {
        self.inner.lock().close(id)
    }

    pub fn set_active(&self, id: &str) -> bool {
        self.inner.lock().set_active(id)
    }

    pub fn close_oldest(&self) -> Option<Tab<C>> {
        self.inner.lock().close_oldest()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn set_capacity(&self, requested: usize) -> usize {
        self.inner.lock().set_capacity(requested)
    }

    pub fn set_capacity_from_str(&self, input: &str) -> usize {
        self.inner.lock().set_capacity_from_str(input)
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        self.inner.lock().snapshot()
    }

    /// Run `f` with read access under the lock
    pub fn with<R>(&self, f: impl FnOnce(&WorkspaceManager<C>) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }

    /// Run `f` with write access under the lock, e.g. to apply several
    /// operations as one step
    pub fn update<R>(&self, f: impl FnOnce(&mut WorkspaceManager<C>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ResolvedView;
    use crate::workspace::TabId;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn clones_share_state() {
        let a: SharedWorkspace<()> = SharedWorkspace::new(WorkspaceManager::default());
        let b = a.clone();
        a.open(TabDescriptor::new("/patients", "Patients", ()));
        assert_eq!(b.snapshot().tab_count(), 1);
        assert!(b.set_active("/patients"));
    }

    #[test]
    fn concurrent_opens_respect_capacity_and_uniqueness() {
        let shared: SharedWorkspace<usize> = SharedWorkspace::new(WorkspaceManager::default());
        shared.set_capacity(10);

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        // Workers overlap on ids so re-opens race with evictions
                        let id = format!("record-{}", (worker * 7 + i) % 30);
                        shared.open(
                            TabDescriptor::new(format!("/patients/{id}"), id.clone(), i)
                                .with_id(TabId::new(id)),
                        );
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker panicked");
        }

        let snap = shared.snapshot();
        assert!(snap.tab_count() <= 10);
        let unique: HashSet<_> = snap.tabs.iter().map(|t| t.id.clone()).collect();
        assert_eq!(unique.len(), snap.tab_count());
        assert!(snap.active.is_some());
    }

    #[test]
    fn update_applies_several_operations() {
        let shared: SharedWorkspace<()> = SharedWorkspace::new(WorkspaceManager::default());
        let count = shared.update(|mgr| {
            mgr.open(TabDescriptor::new("/a", "A", ()));
            mgr.open(TabDescriptor::new("/b", "B", ()));
            mgr.close("/a");
            mgr.tab_count()
        });
        assert_eq!(count, 1);
        assert_eq!(shared.with(|mgr| mgr.active_tab_id().cloned()), Some(TabId::new("/b")));
    }

    /// Resolves only `/known`
    struct OnePath;

    impl NavigationResolver<()> for OnePath {
        fn resolve(&self, path: &str) -> Option<ResolvedView<()>> {
            (path == "/known").then(|| ResolvedView {
                path: path.to_string(),
                title: "Known".to_string(),
                icon: None,
                color: None,
                closable: true,
                content: (),
            })
        }
    }

    #[test]
    fn open_path_matches_manager_behaviour() {
        let shared: SharedWorkspace<()> = SharedWorkspace::new(WorkspaceManager::default());
        assert_eq!(shared.open_path(&OnePath, "/unknown"), None);
        assert_eq!(shared.snapshot().tab_count(), 0);

        assert_eq!(shared.open_path(&OnePath, "/known"), Some(OpenOutcome::Opened));
        assert_eq!(shared.open_path(&OnePath, "/known"), Some(OpenOutcome::Surfaced));
        assert_eq!(shared.snapshot().tab_count(), 1);
    }
}
