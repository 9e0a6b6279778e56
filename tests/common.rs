#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a scratch dir so no real config is read.
pub fn smartcal() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("smartcal_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("smartcal");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_smartcal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB through the CLI.
pub fn init_db(db_path: &str) {
    smartcal()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Build a local date-time from literal strings.
pub fn at(date: &str, time: &str) -> NaiveDateTime {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date");
    let t = NaiveTime::parse_from_str(time, "%H:%M").expect("time");
    d.and_time(t)
}
