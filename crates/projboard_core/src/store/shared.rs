//! Shared store handle for views on one board.
//!
//! # Responsibility
//! - Give every view a cloneable handle to the same `ProjectStore`.
//! - Serialize mutations so each notification round finishes before the
//!   next mutation is applied.
//!
//! # Invariants
//! - A mutation issued while the store is busy (a subscriber calling back
//!   in) is queued, never applied mid-round, and never panics.
//! - Queued mutations run in issue order, each with its own notification.

use crate::model::project::{ProjectId, ProjectRecord, ProjectStatus};
use crate::store::project_store::{ProjectStore, StatusChange, Subscriber};
use log::debug;
use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use uuid::Uuid;

enum PendingMutation {
    Create {
        id: ProjectId,
        title: String,
        description: String,
        people: u32,
    },
    ChangeStatus {
        id: ProjectId,
        status: ProjectStatus,
    },
    Subscribe(Subscriber),
}

impl PendingMutation {
    fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::ChangeStatus { .. } => "change_status",
            Self::Subscribe(_) => "subscribe",
        }
    }
}

/// Cloneable handle to one board's store.
#[derive(Clone)]
pub struct SharedProjectStore {
    store: Rc<RefCell<ProjectStore>>,
    pending: Rc<RefCell<VecDeque<PendingMutation>>>,
}

impl Default for SharedProjectStore {
    fn default() -> Self {
        Self::new(ProjectStore::new())
    }
}

impl SharedProjectStore {
    pub fn new(store: ProjectStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
            pending: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Read access to the store.
    ///
    /// # Panics
    /// Panics when called from inside a subscriber; use `try_borrow` there.
    pub fn borrow(&self) -> Ref<'_, ProjectStore> {
        self.store.borrow()
    }

    /// Read access, or `None` while a mutation is being applied.
    pub fn try_borrow(&self) -> Option<Ref<'_, ProjectStore>> {
        self.store.try_borrow().ok()
    }

    /// Number of mutations waiting for the current notification round.
    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }

    /// See `ProjectStore::subscribe`. A subscriber added from inside another
    /// subscriber only sees later mutations.
    pub fn subscribe(&self, subscriber: impl FnMut(Vec<ProjectRecord>) + 'static) {
        let subscriber: Subscriber = Box::new(subscriber);
        let subscriber = match self.store.try_borrow_mut() {
            Ok(mut store) => {
                store.subscribe(subscriber);
                None
            }
            Err(_) => Some(subscriber),
        };
        match subscriber {
            Some(subscriber) => self.defer(PendingMutation::Subscribe(subscriber)),
            None => self.drain(),
        }
    }

    /// See `ProjectStore::create`. When deferred, the returned id is the one
    /// the project will carry once applied.
    pub fn create(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let (title, description) = (title.into(), description.into());
        let applied = match self.store.try_borrow_mut() {
            Ok(mut store) => Ok(store.create(title, description, people)),
            Err(_) => Err((title, description)),
        };
        match applied {
            Ok(id) => {
                self.drain();
                id
            }
            Err((title, description)) => {
                let id = Uuid::new_v4();
                self.defer(PendingMutation::Create {
                    id,
                    title,
                    description,
                    people,
                });
                id
            }
        }
    }

    /// See `ProjectStore::change_status`. Returns `StatusChange::Deferred`
    /// when issued from inside a subscriber.
    pub fn change_status(&self, id: ProjectId, status: ProjectStatus) -> StatusChange {
        let applied = match self.store.try_borrow_mut() {
            Ok(mut store) => Some(store.change_status(id, status)),
            Err(_) => None,
        };
        match applied {
            Some(change) => {
                self.drain();
                change
            }
            None => {
                self.defer(PendingMutation::ChangeStatus { id, status });
                StatusChange::Deferred
            }
        }
    }

    fn defer(&self, mutation: PendingMutation) {
        debug!(
            "event=mutation_deferred module=store status=skipped reason=notifying mutation={}",
            mutation.name()
        );
        self.pending.borrow_mut().push_back(mutation);
    }

    fn drain(&self) {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(mutation) = next else {
                return;
            };
            let Ok(mut store) = self.store.try_borrow_mut() else {
                // A reader still holds the store; the next mutation drains.
                self.pending.borrow_mut().push_front(mutation);
                return;
            };
            match mutation {
                PendingMutation::Create {
                    id,
                    title,
                    description,
                    people,
                } => {
                    store.insert(id, title, description, people);
                }
                PendingMutation::ChangeStatus { id, status } => {
                    store.change_status(id, status);
                }
                PendingMutation::Subscribe(subscriber) => store.subscribe(subscriber),
            }
        }
    }
}
