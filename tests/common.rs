#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rtracklog::core::validate::EntryValidator;
use rtracklog::models::{EntryFields, EntryInput};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtk() -> Command {
    cargo_bin_cmd!("rtracklog")
}

/// Unique file path inside the system temp dir, removed if it already exists.
fn temp_path(name: &str, suffix: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtracklog{}", name, suffix));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn setup_test_db(name: &str) -> String {
    temp_path(name, ".sqlite")
}

pub fn temp_out(name: &str, ext: &str) -> String {
    temp_path(name, &format!("_out.{}", ext))
}

/// Write a config file with the two default people and the 08:00–17:00
/// half-hour window, pointing at `db_path`.
pub fn write_test_config(name: &str, db_path: &str) -> String {
    let p = temp_path(name, ".conf");
    let yaml = format!(
        "database: {db_path}\nnames:\n  - Venus\n  - Jupiter\nday_start: \"08:00\"\nday_end: \"17:00\"\nslot_minutes: 30\n"
    );
    fs::write(&p, yaml).expect("write config");
    p
}

/// Fresh database + config, schema created through `init`.
pub fn init_env(name: &str) -> (String, String) {
    let db = setup_test_db(name);
    let conf = write_test_config(name, &db);

    rtk()
        .args(["--config", &conf, "--db", &db, "--test", "init"])
        .assert()
        .success();

    (db, conf)
}

pub fn validator() -> EntryValidator {
    let slots = (16..=34)
        .map(|half_hours| NaiveTime::from_hms_opt(half_hours / 2, (half_hours % 2) * 30, 0).unwrap())
        .collect();
    EntryValidator::new(vec!["Venus".into(), "Jupiter".into()], slots)
}

pub fn input(name: &str, date: &str, time: &str) -> EntryInput {
    EntryInput {
        name: name.into(),
        date: date.into(),
        time: time.into(),
        ..Default::default()
    }
}

pub fn fields(name: &str, date: &str, time: &str, started: bool, tx: bool, srp: bool) -> EntryFields {
    EntryFields {
        name: name.into(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        time: rtracklog::utils::time::parse_slot(time).unwrap(),
        started,
        scheduled_tx: tx,
        same_day_srp: srp,
        note: String::new(),
    }
}
