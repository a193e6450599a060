#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dayflow() -> Command {
    cargo_bin_cmd!("dayflow")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dayflow.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test DB (schema only, no config file update)
pub fn init_db(db_path: &str) {
    dayflow()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and record a small day useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for (hour, status) in [("9", "focused"), ("10", "focused"), ("11", "normal"), ("14", "slacking")] {
        dayflow()
            .args(["--db", db_path, "mark", "2025-10-14", hour, status])
            .assert()
            .success();
    }

    dayflow()
        .args(["--db", db_path, "todo", "2025-10-14", "1", "--text", "Write report"])
        .assert()
        .success();
}
