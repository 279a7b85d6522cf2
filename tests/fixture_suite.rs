//! End-to-end checks of the fixture generator binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const ALL_FILES: [&str; 9] = [
    "splitTree",
    "read1",
    "read2",
    "read3",
    "read4",
    "write1",
    "write2",
    "write3",
    "write4",
];

fn fixture_gen() -> Command {
    Command::cargo_bin("treedb_fixtures").unwrap()
}

fn read_all(dir: &Path) -> Vec<Vec<u8>> {
    ALL_FILES
        .iter()
        .map(|name| fs::read(dir.join(name)).unwrap())
        .collect()
}

#[test]
fn test_default_run_writes_canonical_suite() {
    let dir = tempfile::tempdir().unwrap();
    fixture_gen().current_dir(dir.path()).assert().success();

    let split_tree = fs::read_to_string(dir.path().join("splitTree")).unwrap();
    assert_eq!(split_tree.lines().count(), 8192);
    assert!(split_tree.starts_with("a 4096 7\n"));
    assert!(split_tree.ends_with("a 8191 7\n"));

    for name in &ALL_FILES[1..] {
        let content = fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(content.lines().count(), 1024, "{name}");
    }

    let read1 = fs::read_to_string(dir.path().join("read1")).unwrap();
    assert!(read1.starts_with("q 4096\n"));
    assert!(read1.ends_with("q 4\n"));

    let write1 = fs::read_to_string(dir.path().join("write1")).unwrap();
    assert!(write1.starts_with("d 8192 \n"));
    assert!(write1.ends_with("d 4100 \n"));
}

#[test]
fn test_generation_is_deterministic() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fixture_gen().current_dir(first.path()).assert().success();
    fixture_gen().current_dir(second.path()).assert().success();
    assert_eq!(read_all(first.path()), read_all(second.path()));
}

#[test]
fn test_manifest_round_trip_verifies() {
    let dir = tempfile::tempdir().unwrap();
    fixture_gen()
        .current_dir(dir.path())
        .arg("--manifest")
        .assert()
        .success();
    assert!(dir.path().join("manifest.bin").exists());

    fixture_gen()
        .current_dir(dir.path())
        .arg("--verify")
        .assert()
        .success();
}

#[test]
fn test_verify_detects_tampering() {
    let dir = tempfile::tempdir().unwrap();
    fixture_gen()
        .current_dir(dir.path())
        .arg("--manifest")
        .assert()
        .success();

    let target = dir.path().join("read2");
    let mut content = fs::read(&target).unwrap();
    content.extend_from_slice(b"q 1\n");
    fs::write(&target, content).unwrap();

    fixture_gen()
        .current_dir(dir.path())
        .arg("--verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("checksum mismatch"))
        .stderr(predicate::str::contains("read2"));
}

#[test]
fn test_verify_without_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    fixture_gen()
        .current_dir(dir.path())
        .arg("--verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest.bin"));
}

#[test]
fn test_uniform_workload_is_seed_deterministic() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    for dir in [&first, &second] {
        fixture_gen()
            .current_dir(dir.path())
            .args(["--workload", "uniform", "--num-keys", "64", "--seed", "9"])
            .assert()
            .success();
    }
    assert_eq!(read_all(first.path()), read_all(second.path()));

    let third = tempfile::tempdir().unwrap();
    fixture_gen()
        .current_dir(third.path())
        .args(["--workload", "uniform", "--num-keys", "64", "--seed", "10"])
        .assert()
        .success();
    assert_ne!(read_all(first.path()), read_all(third.path()));
}

#[test]
fn test_uniform_manifest_verifies() {
    let dir = tempfile::tempdir().unwrap();
    fixture_gen()
        .current_dir(dir.path())
        .args(["--workload", "uniform", "--num-keys", "64", "--manifest"])
        .assert()
        .success();
    fixture_gen()
        .current_dir(dir.path())
        .arg("--verify")
        .assert()
        .success();
}

#[test]
fn test_missing_target_directory_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    fixture_gen()
        .current_dir(dir.path())
        .args(["--dir", "not_there"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not_there"));
}
