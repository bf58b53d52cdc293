//! Status column view.

use crate::model::project::{ProjectId, ProjectRecord, ProjectStatus};
use crate::store::project_store::StatusChange;
use crate::store::shared::SharedProjectStore;
use crate::view::Component;
use std::cell::RefCell;
use std::rc::Rc;

/// Column showing every project with one status, in store order.
pub struct ProjectListView {
    status: ProjectStatus,
    store: SharedProjectStore,
    assigned: Rc<RefCell<Vec<ProjectRecord>>>,
    configured: bool,
}

impl ProjectListView {
    pub fn new(status: ProjectStatus, store: SharedProjectStore) -> Self {
        Self {
            status,
            store,
            assigned: Rc::new(RefCell::new(Vec::new())),
            configured: false,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Projects currently shown in this column.
    pub fn projects(&self) -> Vec<ProjectRecord> {
        self.assigned.borrow().clone()
    }

    /// Drop handler: moves the dragged project into this column.
    pub fn drop_project(&self, id: ProjectId) -> StatusChange {
        self.store.change_status(id, self.status)
    }

    fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_ascii_uppercase())
    }
}

impl Component for ProjectListView {
    fn configure(&mut self) {
        if self.configured {
            return;
        }
        self.configured = true;

        let status = self.status;
        *self.assigned.borrow_mut() = self
            .store
            .borrow()
            .projects_with_status(status)
            .into_iter()
            .cloned()
            .collect();

        let assigned = Rc::clone(&self.assigned);
        self.store.subscribe(move |projects| {
            *assigned.borrow_mut() = projects
                .into_iter()
                .filter(|project| project.status() == status)
                .collect();
        });
    }

    fn render(&self) -> String {
        let mut out = self.heading();
        let assigned = self.assigned.borrow();
        if assigned.is_empty() {
            out.push_str("\n  (none)");
        }
        for project in assigned.iter() {
            out.push_str(&format!(
                "\n  [{}] {} ({}) - {}",
                project.short_id(),
                project.title(),
                persons_phrase(project.people()),
                project.description()
            ));
        }
        out
    }
}

fn persons_phrase(people: u32) -> String {
    if people == 1 {
        "1 person assigned".to_string()
    } else {
        format!("{people} persons assigned")
    }
}
