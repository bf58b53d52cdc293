//! Board host wiring the form and both status columns to one store.

use crate::model::project::{ProjectId, ProjectStatus};
use crate::store::project_store::{ProjectStore, StatusChange};
use crate::store::shared::SharedProjectStore;
use crate::validation::input_rules::{ProjectInputError, ProjectInputRules};
use crate::view::input::ProjectInputView;
use crate::view::list::ProjectListView;
use crate::view::{attach, Component};
use log::debug;

/// Result of resolving a user-typed id prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdLookup {
    Found(ProjectId),
    NotFound,
    /// More than one project shares the prefix.
    Ambiguous(Vec<ProjectId>),
}

/// Form plus active/finished columns over one shared store.
pub struct ProjectBoard {
    store: SharedProjectStore,
    input: ProjectInputView,
    active: ProjectListView,
    finished: ProjectListView,
}

impl ProjectBoard {
    /// Builds a board over a fresh store.
    pub fn new(rules: ProjectInputRules) -> Self {
        Self::with_store(ProjectStore::shared(), rules)
    }

    /// Builds a board over an existing store handle.
    pub fn with_store(store: SharedProjectStore, rules: ProjectInputRules) -> Self {
        let input = attach(ProjectInputView::new(store.clone(), rules));
        let active = attach(ProjectListView::new(ProjectStatus::Active, store.clone()));
        let finished = attach(ProjectListView::new(ProjectStatus::Finished, store.clone()));
        Self {
            store,
            input,
            active,
            finished,
        }
    }

    pub fn store(&self) -> &SharedProjectStore {
        &self.store
    }

    pub fn input_mut(&mut self) -> &mut ProjectInputView {
        &mut self.input
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectListView {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Fills the form and submits it.
    pub fn submit(
        &mut self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<ProjectId, ProjectInputError> {
        self.input.set_title(title);
        self.input.set_description(description);
        self.input.set_people(people);
        self.input.submit()
    }

    /// Drops a project onto the column for `status`.
    pub fn move_project(&self, id: ProjectId, status: ProjectStatus) -> StatusChange {
        self.list(status).drop_project(id)
    }

    /// Finds the project whose hex id starts with `prefix`.
    pub fn resolve(&self, prefix: &str) -> IdLookup {
        let needle = prefix.trim().to_ascii_lowercase().replace('-', "");
        if needle.is_empty() {
            return IdLookup::NotFound;
        }

        let matches: Vec<ProjectId> = self
            .store
            .borrow()
            .projects()
            .iter()
            .map(|project| project.id())
            .filter(|id| id.simple().to_string().starts_with(&needle))
            .collect();
        debug!(
            "event=id_resolve module=view status=ok matches={}",
            matches.len()
        );

        match matches.len() {
            0 => IdLookup::NotFound,
            1 => IdLookup::Found(matches[0]),
            _ => IdLookup::Ambiguous(matches),
        }
    }

    /// Renders both columns.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.active.render(), self.finished.render())
    }

    /// Renders the form followed by both columns.
    pub fn render_with_form(&self) -> String {
        format!("{}\n\n{}", self.input.render(), self.render())
    }
}
