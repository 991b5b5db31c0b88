use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quilt(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quilt").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("QUILT_NOTEBOOK")
        .env_remove("QUILT_DEFAULT_NOTEBOOK");
    cmd
}

#[test]
fn test_init_creates_notebook_structure() {
    let temp = TempDir::new().unwrap();

    quilt(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized quilt notebook"));

    assert!(temp.path().join(".quilt/journal").is_dir());
    assert!(temp.path().join(".quilt/todos.json").is_file());
}

#[test]
fn test_init_twice_succeeds() {
    let temp = TempDir::new().unwrap();
    quilt(&temp).arg("init").assert().success();
    quilt(&temp).arg("init").assert().success();
}

#[test]
fn test_path_prints_entry_path() {
    let temp = TempDir::new().unwrap();
    quilt(&temp).arg("init").assert().success();

    quilt(&temp)
        .args(["path", "2026-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("journal"))
        .stdout(predicate::str::contains("2026-03-01.md"));
}

#[test]
fn test_view_empty_day() {
    let temp = TempDir::new().unwrap();
    quilt(&temp).arg("init").assert().success();

    quilt(&temp)
        .args(["view", "2026-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No journal entry"));
}

#[test]
fn test_commands_fail_outside_a_notebook() {
    let temp = TempDir::new().unwrap();

    quilt(&temp)
        .arg("view")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no quilt notebook found"));
}

#[test]
fn test_range_rejects_inverted_bounds() {
    let temp = TempDir::new().unwrap();
    quilt(&temp).arg("init").assert().success();

    quilt(&temp)
        .args(["range", "2026-03-02", "2026-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be before"));
}

#[test]
fn test_todos_lists_index_entries() {
    let temp = TempDir::new().unwrap();
    quilt(&temp).arg("init").assert().success();

    std::fs::write(
        temp.path().join(".quilt/todos.json"),
        r#"{"todos": [{"id": "t1", "title": "water the plants"}]}"#,
    )
    .unwrap();

    quilt(&temp)
        .arg("todos")
        .assert()
        .success()
        .stdout(predicate::str::contains("water the plants"));
}
