use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn filemanager(base: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("filemanager");
    cmd.env("FILE_MANAGER_BASE_DIR", base)
        .env_remove("LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_create_list_copy_move_delete() {
    let dir = TempDir::new().unwrap();

    filemanager(dir.path())
        .args(["create", "a/b.txt"])
        .assert()
        .success()
        .stdout("Successfully created file: a/b.txt\n");

    filemanager(dir.path())
        .args(["list", "a"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("b.txt\t0\t"));

    filemanager(dir.path())
        .args(["copy", "a/b.txt", "a/c.txt"])
        .assert()
        .success()
        .stdout("Successfully copied file from a/b.txt to a/c.txt\n");

    filemanager(dir.path())
        .args(["move", "a/c.txt", "a/d.txt"])
        .assert()
        .success()
        .stdout("Successfully moved file from a/c.txt to a/d.txt\n");
    assert!(!dir.path().join("a/c.txt").exists());

    filemanager(dir.path())
        .args(["delete", "a/d.txt"])
        .assert()
        .success()
        .stdout("Successfully deleted file: a/d.txt\n");
    assert!(!dir.path().join("a/d.txt").exists());
    assert!(dir.path().join("a/b.txt").exists());
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), b"hello").unwrap();

    let output = filemanager(dir.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "data.txt");
    assert_eq!(records[0]["size"], 5);
    assert_eq!(records[0]["is_dir"], false);
}

#[test]
fn test_list_long_and_human() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("big.bin"), vec![0u8; 2048]).unwrap();

    filemanager(dir.path())
        .args(["list", "--long", "--human"])
        .assert()
        .success()
        .stdout(predicate::str::contains("big.bin\t2 KiB\t"))
        .stdout(predicate::str::starts_with("-"));
}

#[test]
fn test_base_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    filemanager(env_dir.path())
        .arg("--base-dir")
        .arg(flag_dir.path())
        .args(["create", "here.txt"])
        .assert()
        .success();

    assert!(flag_dir.path().join("here.txt").exists());
    assert!(!env_dir.path().join("here.txt").exists());
}

#[test]
fn test_delete_missing_fails() {
    let dir = TempDir::new().unwrap();

    filemanager(dir.path())
        .args(["delete", "missing.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "operation delete failed for path missing.txt",
        ));
}

#[test]
fn test_escape_is_rejected() {
    let dir = TempDir::new().unwrap();

    filemanager(dir.path())
        .args(["create", "../outside.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("escapes the base directory"));
}

#[test]
fn test_invalid_log_level_fails() {
    let dir = TempDir::new().unwrap();

    filemanager(dir.path())
        .env("LOG_LEVEL", "chatty")
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize logger"));
}

#[test]
fn test_copy_requires_two_arguments() {
    let dir = TempDir::new().unwrap();

    filemanager(dir.path())
        .args(["copy", "only-one"])
        .assert()
        .failure();
}
