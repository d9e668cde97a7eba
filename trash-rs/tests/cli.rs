#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn trash_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trash").unwrap();
    cmd.env("TRASH_DIR", root.as_os_str()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_put_list_restore_workflow() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Trash");
    let file = temp.path().join("a.txt");
    fs::write(&file, "hello").unwrap();

    // 1. Put
    trash_cmd(&root)
        .args(["put", "-v"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved a.txt to trash"));
    assert!(!file.exists());

    // 2. List shows the origin path
    trash_cmd(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(file.to_str().unwrap()));

    // 3. Restore
    trash_cmd(&root)
        .args(["restore", "-v", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "hello");

    trash_cmd(&root)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_put_directory_without_recursive_fails() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("d");
    fs::create_dir(&dir).unwrap();

    trash_cmd(&temp.path().join("Trash"))
        .arg("put")
        .arg(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("recursive not set"));
    assert!(dir.exists());
}

#[test]
fn test_trash_dir_flag_overrides_environment() {
    let temp = TempDir::new().unwrap();
    let flagged = temp.path().join("Flagged");
    let file = temp.path().join("a.txt");
    fs::write(&file, "x").unwrap();

    trash_cmd(&temp.path().join("Env"))
        .arg("--trash-dir")
        .arg(&flagged)
        .arg("put")
        .arg(&file)
        .assert()
        .success();
    assert!(flagged.join("files/a.txt").exists());
    assert!(!temp.path().join("Env").exists());
}

#[test]
fn test_delete_and_missing_item() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Trash");
    let dir = temp.path().join("d");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("inner.txt"), "x").unwrap();

    trash_cmd(&root).args(["put", "-r"]).arg(&dir).assert().success();
    trash_cmd(&root)
        .args(["delete", "-r", "-v", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted d from trash"));
    trash_cmd(&root)
        .args(["delete", "-r", "d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_empty_with_declined_confirmation_keeps_items() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Trash");
    let file = temp.path().join("a.txt");
    fs::write(&file, "x").unwrap();
    trash_cmd(&root).arg("put").arg(&file).assert().success();

    trash_cmd(&root)
        .args(["empty", "-c"])
        .write_stdin("n\n")
        .assert()
        .success();
    assert!(root.join("files/a.txt").exists());

    trash_cmd(&root)
        .args(["empty", "-c", "-v"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted a.txt"));
    assert!(!root.join("files/a.txt").exists());
    assert!(!root.join("info/a.txt.trashinfo").exists());
}

#[test]
fn test_check_reports_orphans() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Trash");
    fs::create_dir_all(root.join("files")).unwrap();
    fs::create_dir_all(root.join("info")).unwrap();
    fs::write(root.join("files/lost.txt"), "x").unwrap();

    trash_cmd(&root)
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("orphaned content: lost.txt"));
}
