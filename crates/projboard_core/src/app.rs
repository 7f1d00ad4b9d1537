//! Application assembly.
//!
//! # Responsibility
//! - Construct the one store for this board and wire every view to it.
//!
//! # Invariants
//! - `App::store()` always returns a handle to the same store instance.
//! - List views are created before any submission can happen.

use crate::config::FormRules;
use crate::model::project::ProjectStatus;
use crate::store::ProjectStore;
use crate::view::alert::AlertSink;
use crate::view::project_input::ProjectInput;
use crate::view::project_list::ProjectList;
use crate::view::Component;
use log::info;
use std::rc::Rc;

/// Top-level owner of the store and its views.
pub struct App {
    store: Rc<ProjectStore>,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl App {
    pub fn new(rules: FormRules, alerts: Rc<dyn AlertSink>) -> Self {
        let store = Rc::new(ProjectStore::new());
        let input = ProjectInput::new(Rc::clone(&store), rules, alerts);
        let active = ProjectList::new(Rc::clone(&store), ProjectStatus::Active);
        let finished = ProjectList::new(Rc::clone(&store), ProjectStatus::Finished);
        info!(
            "event=app_assembled module=app status=ok listeners={}",
            store.listener_count()
        );
        Self {
            store,
            input,
            active,
            finished,
        }
    }

    /// Shared handle to the board's single store.
    pub fn store(&self) -> Rc<ProjectStore> {
        Rc::clone(&self.store)
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ProjectInput {
        &mut self.input
    }

    pub fn active_list(&self) -> &ProjectList {
        &self.active
    }

    pub fn finished_list(&self) -> &ProjectList {
        &self.finished
    }

    /// Renders both lists, active first.
    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            self.active.render_content(),
            self.finished.render_content()
        )
    }
}
