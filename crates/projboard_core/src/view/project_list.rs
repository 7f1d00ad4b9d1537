//! List view showing the projects of one status.
//!
//! # Invariants
//! - Exactly one store listener per list, registered at construction.
//! - Assigned projects are replaced wholesale on every notification.
//! - Dropping the list unregisters its listener.

use crate::model::project::{Project, ProjectStatus};
use crate::store::{ListenerId, ProjectStore};
use crate::view::Component;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

pub struct ProjectList {
    store: Rc<ProjectStore>,
    status: ProjectStatus,
    assigned: Rc<RefCell<Vec<Project>>>,
    subscription: Option<ListenerId>,
}

impl ProjectList {
    /// Creates a list for `status` and subscribes it to `store`.
    pub fn new(store: Rc<ProjectStore>, status: ProjectStatus) -> Self {
        let mut list = Self {
            store,
            status,
            assigned: Rc::new(RefCell::new(Vec::new())),
            subscription: None,
        };
        list.configure();
        list
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Projects assigned by the latest notification.
    pub fn projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }
}

impl Component for ProjectList {
    fn configure(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let assigned = Rc::clone(&self.assigned);
        let status = self.status;
        let id = self.store.add_listener(move |snapshot| {
            let relevant: Vec<Project> = snapshot
                .iter()
                .filter(|project| project.status == status)
                .cloned()
                .collect();
            debug!(
                "event=list_refreshed module=view status=ok list={} assigned={}",
                status.as_str(),
                relevant.len()
            );
            *assigned.borrow_mut() = relevant;
        });
        self.subscription = Some(id);
    }

    fn render_content(&self) -> String {
        let mut out = self.heading();
        out.push('\n');
        for project in self.assigned.borrow().iter() {
            out.push_str(&format!(
                "- {} ({}): {}\n",
                project.title,
                project.people_label(),
                project.description
            ));
        }
        out
    }
}

impl Drop for ProjectList {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.store.remove_listener(id);
        }
    }
}
