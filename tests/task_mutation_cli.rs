mod support;

use serde_json::Value;

use support::TestStore;

fn done_json(store: &TestStore, id: &str) -> Value {
    let output = store
        .cmd()
        .args(["done", id, "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("done json")
}

#[test]
fn done_toggles_and_toggles_back() {
    let store = TestStore::new();
    let id = store.add_task("flip me");

    let first = done_json(&store, &id);
    assert_eq!(first["data"]["found"].as_bool(), Some(true));
    assert_eq!(first["data"]["completed"].as_bool(), Some(true));

    let second = done_json(&store, &id);
    assert_eq!(second["data"]["completed"].as_bool(), Some(false));

    let state = store.read_state();
    assert_eq!(state["tasks"][0]["completed"].as_bool(), Some(false));
}

#[test]
fn done_with_unknown_id_is_a_noop() {
    let store = TestStore::new();
    store.add_task("only task");

    let value = done_json(&store, "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    assert_eq!(value["data"]["found"].as_bool(), Some(false));
    assert!(value["warnings"][0]
        .as_str()
        .unwrap_or_default()
        .contains("no task with id"));

    let state = store.read_state();
    assert_eq!(state["tasks"].as_array().map(|t| t.len()), Some(1));
    assert_eq!(state["tasks"][0]["completed"].as_bool(), Some(false));
}

#[test]
fn rm_removes_exactly_the_matching_task() {
    let store = TestStore::new();
    store.add_task("first");
    let target = store.add_task("second");
    store.add_task("third");

    store.cmd().args(["rm", &target]).assert().success();

    let state = store.read_state();
    let titles: Vec<&str> = state["tasks"]
        .as_array()
        .expect("tasks")
        .iter()
        .map(|task| task["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles, vec!["first", "third"]);
}

#[test]
fn rm_unknown_id_leaves_count_unchanged() {
    let store = TestStore::new();
    store.add_task("one");
    store.add_task("two");

    store
        .cmd()
        .args(["rm", "does-not-exist"])
        .assert()
        .success();

    let state = store.read_state();
    assert_eq!(state["tasks"].as_array().map(|t| t.len()), Some(2));
}

#[test]
fn edit_updates_fields_in_place() {
    let store = TestStore::new();
    let id = store.add_task("draft");

    store
        .cmd()
        .args([
            "edit",
            &id,
            "--title",
            "final",
            "--priority",
            "high",
            "--description",
            "ready for review",
        ])
        .assert()
        .success();

    let state = store.read_state();
    let task = &state["tasks"][0];
    assert_eq!(task["id"].as_str(), Some(id.as_str()));
    assert_eq!(task["title"].as_str(), Some("final"));
    assert_eq!(task["priority"].as_str(), Some("high"));
    assert_eq!(task["description"].as_str(), Some("ready for review"));
}

#[test]
fn edit_rejects_blank_title() {
    let store = TestStore::new();
    let id = store.add_task("keep this title");

    store
        .cmd()
        .args(["edit", &id, "--title", "  "])
        .assert()
        .failure()
        .code(2);

    let state = store.read_state();
    assert_eq!(state["tasks"][0]["title"].as_str(), Some("keep this title"));
}

#[test]
fn edit_requires_at_least_one_field() {
    let store = TestStore::new();
    let id = store.add_task("task");

    store.cmd().args(["edit", &id]).assert().failure().code(2);
}

#[test]
fn edit_clears_due_date_with_empty_value() {
    let store = TestStore::new();
    let id = store.add_task("task");
    store
        .cmd()
        .args(["edit", &id, "--due", "2031-06-01"])
        .assert()
        .success();
    assert!(store.read_state()["tasks"][0]["due_date"].is_number());

    store
        .cmd()
        .args(["edit", &id, "--due", ""])
        .assert()
        .success();
    assert!(store.read_state()["tasks"][0]["due_date"].is_null());
}

#[test]
fn clear_drops_completed_and_keeps_order() {
    let store = TestStore::new();
    store.add_task("a");
    let b = store.add_task("b");
    store.add_task("c");
    let d = store.add_task("d");

    store.cmd().args(["done", &b]).assert().success();
    store.cmd().args(["done", &d]).assert().success();

    let output = store
        .cmd()
        .args(["clear", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("clear json");
    assert_eq!(value["data"]["removed"].as_u64(), Some(2));
    assert_eq!(value["data"]["remaining"].as_u64(), Some(2));

    let state = store.read_state();
    let titles: Vec<&str> = state["tasks"]
        .as_array()
        .expect("tasks")
        .iter()
        .map(|task| task["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles, vec!["a", "c"]);
    assert!(state["tasks"]
        .as_array()
        .expect("tasks")
        .iter()
        .all(|task| task["completed"].as_bool() == Some(false)));
}
