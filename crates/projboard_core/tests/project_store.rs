use projboard_core::{ProjectRecord, ProjectStatus, ProjectStore, StatusChange};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

type Received = Rc<RefCell<Vec<Vec<ProjectRecord>>>>;

fn recording_subscriber(store: &mut ProjectStore) -> Received {
    let received: Received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    store.subscribe(move |projects| sink.borrow_mut().push(projects));
    received
}

#[test]
fn create_appends_active_record_and_notifies_once() {
    let mut store = ProjectStore::new();
    let existing = store.create("Existing", "already here", 2);
    let received = recording_subscriber(&mut store);

    let id = store.create("Build API", "Implement REST endpoints", 4);

    assert_eq!(store.len(), 2);
    assert_ne!(id, existing);
    let calls = received.borrow();
    assert_eq!(calls.len(), 1);
    let snapshot = &calls[0];
    assert_eq!(snapshot.len(), 2);
    let last = snapshot.last().unwrap();
    assert_eq!(last.id(), id);
    assert_eq!(last.title(), "Build API");
    assert_eq!(last.description(), "Implement REST endpoints");
    assert_eq!(last.people(), 4);
    assert_eq!(last.status(), ProjectStatus::Active);
}

#[test]
fn create_assigns_unique_ids() {
    let mut store = ProjectStore::new();
    let ids: HashSet<_> = (0..200)
        .map(|n| store.create(format!("project {n}"), "bulk", 1))
        .collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn create_performs_no_validation() {
    let mut store = ProjectStore::new();
    let id = store.create("", "", 0);
    assert_eq!(store.get(id).unwrap().people(), 0);
}

#[test]
fn subscribers_are_notified_in_registration_order() {
    let mut store = ProjectStore::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        store.subscribe(move |_| order.borrow_mut().push(name));
    }

    store.create("Ordered", "notification order", 1);
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn unknown_id_is_silent_noop() {
    let mut store = ProjectStore::new();
    store.create("Only", "one project", 1);
    let before = store.projects().to_vec();
    let received = recording_subscriber(&mut store);

    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        assert_eq!(
            store.change_status(Uuid::new_v4(), status),
            StatusChange::NotFound
        );
    }

    assert_eq!(store.projects(), before.as_slice());
    assert!(received.borrow().is_empty());
}

#[test]
fn same_status_is_noop_without_notification() {
    let mut store = ProjectStore::new();
    let id = store.create("Steady", "stays active", 3);
    let received = recording_subscriber(&mut store);

    assert_eq!(
        store.change_status(id, ProjectStatus::Active),
        StatusChange::Unchanged
    );
    assert!(received.borrow().is_empty());
}

#[test]
fn status_change_updates_only_target_and_notifies_once() {
    let mut store = ProjectStore::new();
    let first = store.create("First", "left alone", 1);
    let target = store.create("Target", "gets finished", 2);
    let third = store.create("Third", "left alone", 3);
    let received = recording_subscriber(&mut store);

    let change = store.change_status(target, ProjectStatus::Finished);

    assert!(change.is_changed());
    assert_eq!(received.borrow().len(), 1);
    assert_eq!(store.get(target).unwrap().status(), ProjectStatus::Finished);
    assert_eq!(store.get(first).unwrap().status(), ProjectStatus::Active);
    assert_eq!(store.get(third).unwrap().status(), ProjectStatus::Active);
    let order: Vec<_> = store.projects().iter().map(|p| p.id()).collect();
    assert_eq!(order, vec![first, target, third]);
}

#[test]
fn finishing_twice_changes_once() {
    let mut store = ProjectStore::new();
    let id = store.create("Twice", "finished twice", 2);
    let received = recording_subscriber(&mut store);

    store.change_status(id, ProjectStatus::Finished);
    store.change_status(id, ProjectStatus::Finished);

    assert_eq!(received.borrow().len(), 1);
}

#[test]
fn finished_project_can_be_reactivated() {
    let mut store = ProjectStore::new();
    let id = store.create("Back", "and forth", 2);
    store.change_status(id, ProjectStatus::Finished);

    assert_eq!(
        store.change_status(id, ProjectStatus::Active),
        StatusChange::Changed {
            from: ProjectStatus::Finished,
            to: ProjectStatus::Active,
        }
    );
}

#[test]
fn subscriber_snapshots_are_isolated() {
    let mut store = ProjectStore::new();
    store.subscribe(|mut projects: Vec<ProjectRecord>| {
        projects.clear();
    });
    let received = recording_subscriber(&mut store);

    let id = store.create("Isolated", "cannot be cleared", 5);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(id).unwrap().title(), "Isolated");
    assert_eq!(received.borrow()[0].len(), 1);
}

#[test]
fn walkthrough_create_finish_finish_again() {
    let mut store = ProjectStore::new();
    let received = recording_subscriber(&mut store);

    let id = store.create("Build API", "Implement REST endpoints", 4);
    {
        let calls = received.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1);
        assert_eq!(calls[0][0].status(), ProjectStatus::Active);
    }

    store.change_status(id, ProjectStatus::Finished);
    {
        let calls = received.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].len(), 1);
        assert_eq!(calls[1][0].id(), id);
        assert_eq!(calls[1][0].status(), ProjectStatus::Finished);
    }

    store.change_status(id, ProjectStatus::Finished);
    assert_eq!(received.borrow().len(), 2);
}
