//! In-memory project store with change notification.
//!
//! # Responsibility
//! - Own the append-only project sequence.
//! - Fan out every mutation to registered listeners.
//!
//! # Invariants
//! - Listeners run synchronously, in registration order, after each append.
//! - Every listener of one notification sees the same snapshot of the full
//!   sequence, taken right after the append.
//! - The last snapshot any listener receives is the newest one: a round that
//!   is overtaken by a nested append stops, since the nested round already
//!   delivered the newer snapshot to every listener.
//! - Listeners registered later never receive a replay of earlier state.
//! - A panicking listener is logged and skipped; later listeners still run.
//! - Listeners may add projects or (un)register listeners while being
//!   notified. A listener registered mid-notification misses that round; a
//!   listener removed mid-notification is not called again, even in that round.

use crate::model::project::{Project, ProjectId};
use log::{debug, error, info};
use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

/// Callback invoked with a snapshot of all projects after each mutation.
pub type Listener = dyn Fn(&[Project]);

/// Handle returned by `ProjectStore::add_listener`, used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Single-threaded observable project store.
///
/// Shared between views as `Rc<ProjectStore>`; all methods take `&self`.
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<(ListenerId, Rc<Listener>)>>,
    next_listener_id: Cell<u64>,
    /// Bumped on every append; lets a notification round detect it is stale.
    generation: Cell<u64>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. The same callback may be registered repeatedly.
    pub fn add_listener(&self, listener: impl Fn(&[Project]) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        let listener: Rc<Listener> = Rc::new(listener);
        self.listeners.borrow_mut().push((id, listener));
        debug!(
            "event=listener_added module=store status=ok listener_id={} listeners={}",
            id.0,
            self.listener_count()
        );
        id
    }

    /// Unregisters one listener. Returns `false` for unknown ids.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(entry_id, _)| *entry_id != id);
        let removed = listeners.len() != before;
        debug!(
            "event=listener_removed module=store status={} listener_id={}",
            if removed { "ok" } else { "not_found" },
            id.0
        );
        removed
    }

    /// Appends a new active project and notifies every listener.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        let snapshot = {
            let mut projects = self.projects.borrow_mut();
            projects.push(project);
            projects.clone()
        };
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        info!(
            "event=project_added module=store status=ok project_id={} people={} total={}",
            id,
            people,
            snapshot.len()
        );
        self.notify(&snapshot, generation);
        id
    }

    /// Returns a snapshot of all projects in insertion order.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(entry_id, _)| *entry_id == id)
    }

    fn notify(&self, snapshot: &[Project], generation: u64) {
        // Cloned so listeners can touch the registry while being called.
        let listeners: Vec<(ListenerId, Rc<Listener>)> = self.listeners.borrow().clone();
        for (id, listener) in listeners {
            if self.generation.get() != generation {
                debug!(
                    "event=notify_superseded module=store status=ok generation={} total={}",
                    generation,
                    snapshot.len()
                );
                return;
            }
            if !self.is_registered(id) {
                continue;
            }
            let outcome = catch_unwind(AssertUnwindSafe(|| listener(snapshot)));
            if outcome.is_err() {
                error!(
                    "event=listener_failed module=store status=error listener_id={} total={}",
                    id.0,
                    snapshot.len()
                );
            }
        }
    }
}

impl Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectStore;
    use crate::model::project::ProjectStatus;
    use crate::view::project_list::ProjectList;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn listener_ids_are_distinct() {
        let store = ProjectStore::new();
        let first = store.add_listener(|_| {});
        let second = store.add_listener(|_| {});
        assert_ne!(first, second);
        assert_eq!(store.listener_count(), 2);
    }

    #[test]
    fn remove_unknown_listener_returns_false() {
        let store = ProjectStore::new();
        let id = store.add_listener(|_| {});
        assert!(store.remove_listener(id));
        assert!(!store.remove_listener(id));
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn listener_registered_during_notification_misses_that_round() {
        let store = Rc::new(ProjectStore::new());
        let late_calls = Rc::new(RefCell::new(Vec::new()));

        let registered = Rc::new(Cell::new(false));
        let store_handle = Rc::clone(&store);
        let late_handle = Rc::clone(&late_calls);
        store.add_listener(move |_| {
            if registered.replace(true) {
                return;
            }
            let late = Rc::clone(&late_handle);
            store_handle.add_listener(move |snapshot| late.borrow_mut().push(snapshot.len()));
        });

        store.add_project("T", "Desc1", 3);
        assert!(late_calls.borrow().is_empty());

        store.add_project("U", "Desc2", 4);
        assert_eq!(*late_calls.borrow(), vec![2]);
    }

    #[test]
    fn listener_may_add_projects_while_notified() {
        let store = Rc::new(ProjectStore::new());
        let store_handle = Rc::clone(&store);
        store.add_listener(move |snapshot| {
            if snapshot.len() == 1 {
                store_handle.add_project("follow-up", "Created by listener", 1);
            }
        });

        store.add_project("T", "Desc1", 3);
        let titles: Vec<String> = store.projects().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["T", "follow-up"]);
    }

    #[test]
    fn later_listeners_end_with_newest_snapshot_after_nested_add() {
        let store = Rc::new(ProjectStore::new());
        let store_handle = Rc::clone(&store);
        store.add_listener(move |snapshot| {
            if snapshot.len() == 1 {
                store_handle.add_project("follow-up", "Created by listener", 1);
            }
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_handle = Rc::clone(&seen);
        store.add_listener(move |snapshot| seen_handle.borrow_mut().push(snapshot.len()));
        let list = ProjectList::new(Rc::clone(&store), ProjectStatus::Active);

        store.add_project("T", "Desc1", 3);

        assert_eq!(*seen.borrow(), vec![2]);
        assert_eq!(list.projects().len(), store.len());
    }

    #[test]
    fn listener_removed_mid_round_is_not_called() {
        let store = Rc::new(ProjectStore::new());
        let victim = Rc::new(Cell::new(None));
        let calls = Rc::new(Cell::new(0));

        let store_handle = Rc::clone(&store);
        let victim_handle = Rc::clone(&victim);
        store.add_listener(move |_| {
            if let Some(id) = victim_handle.take() {
                store_handle.remove_listener(id);
            }
        });
        let calls_handle = Rc::clone(&calls);
        let id = store.add_listener(move |_| calls_handle.set(calls_handle.get() + 1));
        victim.set(Some(id));

        store.add_project("T", "Desc1", 3);

        assert_eq!(calls.get(), 0);
        assert_eq!(store.listener_count(), 1);
    }
}
