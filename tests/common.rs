#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use caresync::models::EventRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fixed "today" for every date-range assertion.
pub const TODAY: &str = "2024-01-15";

pub fn today() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
}

/// Fresh, empty directory under the system temp dir.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("caresync_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Binary with an isolated HOME, no database override.
pub fn cs_home(name: &str) -> Command {
    let home = env::temp_dir().join(format!("caresync_test_{name}"));
    fs::create_dir_all(&home).expect("create temp home");

    let mut cmd = cargo_bin_cmd!("caresync");
    cmd.env("HOME", &home)
        .env_remove("CARESYNC_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Binary with an isolated HOME and its own database.
pub fn cs_raw(name: &str) -> Command {
    let home = env::temp_dir().join(format!("caresync_test_{name}"));
    fs::create_dir_all(&home).expect("create temp home");
    let db = home.join("caresync.sqlite");

    let mut cmd = cargo_bin_cmd!("caresync");
    cmd.env("HOME", &home)
        .env_remove("CARESYNC_LOG")
        .env_remove("RUST_LOG")
        .args(["--db", &db.to_string_lossy()]);
    cmd
}

/// Like [`cs_raw`], with today pinned to [`TODAY`].
pub fn cs(name: &str) -> Command {
    let mut cmd = cs_raw(name);
    cmd.args(["--today", TODAY]);
    cmd
}

/// Output file path inside the test home, removed if present.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path = env::temp_dir().join(format!("caresync_test_{name}"));
    fs::create_dir_all(&path).ok();
    path.push(format!("out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ids(records: &[&EventRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}
