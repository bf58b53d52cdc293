//! Project entry form view.

use crate::model::project::ProjectId;
use crate::store::shared::SharedProjectStore;
use crate::validation::input_rules::{ProjectInputError, ProjectInputRules};
use crate::view::Component;

/// Form collecting title, description and headcount text.
///
/// The submit handler is bound to the store handle captured at
/// construction.
pub struct ProjectInputView {
    store: SharedProjectStore,
    rules: ProjectInputRules,
    title: String,
    description: String,
    people: String,
}

impl ProjectInputView {
    pub fn new(store: SharedProjectStore, rules: ProjectInputRules) -> Self {
        Self {
            store,
            rules,
            title: String::new(),
            description: String::new(),
            people: String::new(),
        }
    }

    pub fn rules(&self) -> &ProjectInputRules {
        &self.rules
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    /// Current `(title, description, people)` buffers.
    pub fn fields(&self) -> (&str, &str, &str) {
        (&self.title, &self.description, &self.people)
    }

    /// Validates the buffers and creates the project.
    ///
    /// On failure nothing is created and the buffers are left untouched so
    /// the user can correct them.
    pub fn submit(&mut self) -> Result<ProjectId, ProjectInputError> {
        let draft = self
            .rules
            .check(&self.title, &self.description, &self.people)?;
        let id = self
            .store
            .create(draft.title, draft.description, draft.people);
        self.clear();
        Ok(id)
    }

    fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

impl Component for ProjectInputView {
    // The form has no subscriptions; submission is driven by the host.
    fn configure(&mut self) {}

    fn render(&self) -> String {
        format!(
            "NEW PROJECT\n  title: {}\n  description: {}\n  people: {}",
            self.title, self.description, self.people
        )
    }
}
