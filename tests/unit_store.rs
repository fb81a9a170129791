use chrono::{Duration, Utc};

use tick::error::Error;
use tick::storage::StateFile;
use tick::store::TaskStore;
use tick::task::{Filter, NewTask, Priority, TaskPatch};

fn open_store(dir: &tempfile::TempDir) -> TaskStore {
    let file = StateFile::new(dir.path().join("tasks.json"));
    TaskStore::load(file).expect("load store")
}

fn new_task(title: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        ..Default::default()
    }
}

#[test]
fn mutations_survive_a_reload() {
    let dir = tempfile::tempdir().expect("tempdir");

    let first_id;
    {
        let mut store = open_store(&dir);
        first_id = store.add(new_task("persisted")).expect("add");
        store.set_filter(Filter::Active).expect("filter");
    }

    let store = open_store(&dir);
    let snapshot = store.snapshot();
    assert_eq!(snapshot.tasks.len(), 1);
    assert_eq!(snapshot.tasks[0].id, first_id);
    assert_eq!(snapshot.tasks[0].title, "persisted");
    assert_eq!(snapshot.filter, Filter::Active);
}

#[test]
fn add_rejects_empty_title_without_state_change() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = open_store(&dir);
    store.add(new_task("real")).expect("add");

    match store.add(new_task("   ")) {
        Err(Error::EmptyTitle) => {}
        other => panic!("expected EmptyTitle, got {other:?}"),
    }
    assert_eq!(store.snapshot().tasks.len(), 1);
}

#[test]
fn toggle_twice_restores_completed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = open_store(&dir);
    let id = store.add(new_task("flip")).expect("add");

    assert!(store.toggle(&id).expect("toggle"));
    assert!(store.snapshot().get(&id).expect("task").completed);

    assert!(store.toggle(&id).expect("toggle"));
    assert!(!store.snapshot().get(&id).expect("task").completed);
}

#[test]
fn toggle_and_delete_unknown_ids_are_noops() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = open_store(&dir);
    store.add(new_task("only")).expect("add");

    assert!(!store.toggle("missing").expect("toggle"));
    assert!(!store.delete("missing").expect("delete"));
    assert!(!store
        .update(
            "missing",
            TaskPatch {
                title: Some("new".to_string()),
                ..Default::default()
            }
        )
        .expect("update"));
    assert_eq!(store.snapshot().tasks.len(), 1);
}

#[test]
fn update_patches_only_the_given_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = open_store(&dir);
    let id = store
        .add(NewTask {
            title: "original".to_string(),
            description: Some("keep me".to_string()),
            ..Default::default()
        })
        .expect("add");

    assert!(store
        .update(
            &id,
            TaskPatch {
                priority: Some(Priority::High),
                ..Default::default()
            }
        )
        .expect("update"));

    let snapshot = store.snapshot();
    let task = snapshot.get(&id).expect("task");
    assert_eq!(task.title, "original");
    assert_eq!(task.description.as_deref(), Some("keep me"));
    assert_eq!(task.priority, Priority::High);
}

#[test]
fn update_with_blank_title_changes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = open_store(&dir);
    let id = store.add(new_task("original")).expect("add");

    let result = store.update(
        &id,
        TaskPatch {
            title: Some(" ".to_string()),
            priority: Some(Priority::High),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(Error::EmptyTitle)));

    let snapshot = store.snapshot();
    let task = snapshot.get(&id).expect("task");
    assert_eq!(task.title, "original");
    assert_eq!(task.priority, Priority::Medium);
}

#[test]
fn clear_completed_reports_removed_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = open_store(&dir);
    let a = store.add(new_task("a")).expect("add");
    store.add(new_task("b")).expect("add");
    let c = store.add(new_task("c")).expect("add");

    store.toggle(&a).expect("toggle");
    store.toggle(&c).expect("toggle");

    assert_eq!(store.clear_completed().expect("clear"), 2);
    assert_eq!(store.clear_completed().expect("clear"), 0);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.tasks.len(), 1);
    assert_eq!(snapshot.tasks[0].title, "b");
}

#[test]
fn snapshot_equals_state_reloaded_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = open_store(&dir);
    store
        .add(NewTask {
            title: "round trip".to_string(),
            description: Some("with due date".to_string()),
            due_date: Some(Utc::now() + Duration::days(1)),
            priority: Priority::High,
        })
        .expect("add");
    let id = store.add(new_task("second")).expect("add");
    store.toggle(&id).expect("toggle");
    store.set_filter(Filter::Completed).expect("filter");

    let before = store.snapshot();
    let reloaded = store.state_file().load().expect("reload");
    assert_eq!(before, reloaded);
}

#[test]
fn snapshot_is_detached_from_the_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = open_store(&dir);
    store.add(new_task("stable")).expect("add");

    let mut snapshot = store.snapshot();
    snapshot.tasks.clear();
    snapshot.set_filter(Filter::Completed);

    let fresh = store.snapshot();
    assert_eq!(fresh.tasks.len(), 1);
    assert_eq!(fresh.filter, Filter::All);
}
