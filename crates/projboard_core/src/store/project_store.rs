//! Observable project store.
//!
//! # Responsibility
//! - Create projects and apply status transitions.
//! - Notify subscribers synchronously, in registration order.
//!
//! # Invariants
//! - Insertion order of projects is preserved and is the render order.
//! - Each accepted mutation triggers exactly one call per subscriber.
//! - `change_status` with an unknown id or an unchanged status notifies no one.
//! - Mutations issued by a subscriber through `SharedProjectStore` are
//!   applied after the current notification round completes.

use crate::model::project::{ProjectId, ProjectRecord, ProjectStatus};
use crate::store::shared::SharedProjectStore;
use log::{debug, info, warn};
use uuid::Uuid;

/// Callback receiving a full snapshot after every accepted mutation.
pub type Subscriber = Box<dyn FnMut(Vec<ProjectRecord>)>;

/// Outcome of `ProjectStore::change_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Status was updated and subscribers were notified.
    Changed {
        from: ProjectStatus,
        to: ProjectStatus,
    },
    /// Project already had the requested status.
    Unchanged,
    /// No project has the given id.
    NotFound,
    /// Issued while subscribers were being notified; applied right after.
    Deferred,
}

impl StatusChange {
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Single source of truth for projects on one board.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<ProjectRecord>,
    subscribers: Vec<Subscriber>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped in a shareable handle.
    pub fn shared() -> SharedProjectStore {
        SharedProjectStore::new(Self::new())
    }

    /// Registers a subscriber. Duplicates are kept and called twice.
    pub fn subscribe(&mut self, subscriber: impl FnMut(Vec<ProjectRecord>) + 'static) {
        self.subscribers.push(Box::new(subscriber));
        debug!(
            "event=subscriber_added module=store status=ok subscribers={}",
            self.subscribers.len()
        );
    }

    /// Appends a new `Active` project and notifies subscribers.
    ///
    /// # Contract
    /// - Inputs are not validated here; callers run input rules first.
    /// - The returned id differs from every id already in the store.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let id = self.fresh_id();
        self.insert(id, title, description, people)
    }

    /// Appends a project under an id reserved by the caller.
    ///
    /// A reserved id that is already taken is replaced by a fresh one.
    pub(crate) fn insert(
        &mut self,
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let id = if self.get(id).is_some() {
            let fresh = self.fresh_id();
            warn!(
                "event=project_create module=store status=error reason=id_taken project_id={id} replacement={fresh}"
            );
            fresh
        } else {
            id
        };
        self.projects
            .push(ProjectRecord::new(id, title, description, people));
        info!(
            "event=project_create module=store status=ok project_id={} projects={}",
            id,
            self.projects.len()
        );
        self.notify();
        id
    }

    /// Moves a project to `status`.
    ///
    /// Unknown ids and no-op transitions are silently ignored apart from a
    /// debug log line; the returned value says which case applied.
    pub fn change_status(&mut self, id: ProjectId, status: ProjectStatus) -> StatusChange {
        let Some(project) = self.projects.iter_mut().find(|project| project.id() == id) else {
            debug!(
                "event=project_status_change module=store status=skipped reason=not_found project_id={id}"
            );
            return StatusChange::NotFound;
        };

        let from = project.status();
        if from == status {
            debug!(
                "event=project_status_change module=store status=skipped reason=unchanged project_id={id} project_status={status}"
            );
            return StatusChange::Unchanged;
        }

        project.set_status(status);
        info!(
            "event=project_status_change module=store status=ok project_id={id} from={from} to={status}"
        );
        self.notify();
        StatusChange::Changed { from, to: status }
    }

    /// Current projects in insertion order.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Projects with the given status, in insertion order.
    pub fn projects_with_status(&self, status: ProjectStatus) -> Vec<&ProjectRecord> {
        self.projects
            .iter()
            .filter(|project| project.status() == status)
            .collect()
    }

    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.id() == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn fresh_id(&self) -> ProjectId {
        loop {
            let candidate = Uuid::new_v4();
            if self.get(candidate).is_none() {
                return candidate;
            }
        }
    }

    fn notify(&mut self) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(self.projects.clone());
        }
    }
}
