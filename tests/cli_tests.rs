use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::io::Read;

mod common;
use common::{init_env, rtk, temp_out};

fn add(db: &str, conf: &str, extra: &[&str]) {
    let mut args = vec!["--config", conf, "--db", db, "add"];
    args.extend_from_slice(extra);
    rtk().args(&args).assert().success();
}

/// Venus on 2024-01-01 (started) and Jupiter on 2024-01-02 (not started).
fn seed_scenario(db: &str, conf: &str) {
    add(
        db,
        conf,
        &["--name", "Venus", "--date", "2024-01-01", "--time", "08:00 AM", "--started"],
    );
    add(
        db,
        conf,
        &["--name", "Jupiter", "--date", "2024-01-02", "--time", "09:00 AM", "--note", "follow up"],
    );
}

#[test]
fn add_and_list_entries() {
    let (db, conf) = init_env("cli_add_list");
    seed_scenario(&db, &conf);

    rtk()
        .args(["--config", &conf, "--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("Venus"))
        .stdout(contains("Jupiter"))
        .stdout(contains("08:00 AM"))
        .stdout(contains("follow up"));
}

#[test]
fn list_filters_by_date_window() {
    let (db, conf) = init_env("cli_list_window");
    seed_scenario(&db, &conf);

    rtk()
        .args([
            "--config", &conf, "--db", &db, "list", "--from", "2024-01-01", "--to", "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(contains("Venus"))
        .stdout(contains("Jupiter").not());

    rtk()
        .args(["--config", &conf, "--db", &db, "list", "--range", "2024-01", "--name", "Jupiter"])
        .assert()
        .success()
        .stdout(contains("Jupiter"))
        .stdout(contains("Venus").not());
}

#[test]
fn list_on_empty_database() {
    let (db, conf) = init_env("cli_list_empty");

    rtk()
        .args(["--config", &conf, "--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("No data yet."));
}

#[test]
fn add_rejects_unknown_name_and_bad_slot() {
    let (db, conf) = init_env("cli_add_invalid");

    rtk()
        .args([
            "--config", &conf, "--db", &db, "add", "--name", "Mars", "--date", "2024-01-01",
            "--time", "08:00 AM",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid name"));

    rtk()
        .args([
            "--config", &conf, "--db", &db, "add", "--name", "Venus", "--date", "2024-01-01",
            "--time", "08:15 AM",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    rtk()
        .args(["--config", &conf, "--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("No data yet."));
}

#[test]
fn edit_updates_only_given_fields() {
    let (db, conf) = init_env("cli_edit");
    seed_scenario(&db, &conf);

    rtk()
        .args([
            "--config", &conf, "--db", &db, "edit", "2", "--time", "10:30 AM", "--scheduled-tx",
        ])
        .assert()
        .success()
        .stdout(contains("Entry #2 updated"));

    rtk()
        .args(["--config", &conf, "--db", &db, "list", "--name", "Jupiter"])
        .assert()
        .success()
        .stdout(contains("10:30 AM"))
        .stdout(contains("follow up"));

    rtk()
        .args(["--config", &conf, "--db", &db, "edit", "99", "--note", "x"])
        .assert()
        .failure()
        .stderr(contains("No entry found with id 99"));
}

#[test]
fn delete_twice_fails_the_second_time() {
    let (db, conf) = init_env("cli_del");
    seed_scenario(&db, &conf);

    rtk()
        .args(["--config", &conf, "--db", &db, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Entry #1 has been deleted."));

    rtk()
        .args(["--config", &conf, "--db", &db, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry found with id 1"));

    rtk()
        .args(["--config", &conf, "--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("Venus").not());
}

#[test]
fn delete_is_cancelled_without_confirmation() {
    let (db, conf) = init_env("cli_del_cancel");
    seed_scenario(&db, &conf);

    rtk()
        .args(["--config", &conf, "--db", &db, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rtk()
        .args(["--config", &conf, "--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("Venus"));
}

#[test]
fn report_tables_and_json() {
    let (db, conf) = init_env("cli_report");
    seed_scenario(&db, &conf);

    rtk()
        .args(["--config", &conf, "--db", &db, "report"])
        .assert()
        .success()
        .stdout(contains("Checkbox rate by person"))
        .stdout(contains("Started Same Day"))
        .stdout(contains("No Data"));

    rtk()
        .args(["--config", &conf, "--db", &db, "report", "--json", "--range", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("\"entries\": 1"))
        .stdout(contains("\"placeholder\": true"))
        .stdout(contains("Jupiter").not());
}

#[test]
fn report_with_empty_window_warns() {
    let (db, conf) = init_env("cli_report_empty");
    seed_scenario(&db, &conf);

    rtk()
        .args(["--config", &conf, "--db", &db, "report", "--range", "2023"])
        .assert()
        .success()
        .stdout(contains("No data found for selected date range."));
}

#[test]
fn export_csv_and_json() {
    let (db, conf) = init_env("cli_export");
    seed_scenario(&db, &conf);

    let csv_out = temp_out("cli_export", "csv");
    rtk()
        .args([
            "--config", &conf, "--db", &db, "export", "--format", "csv", "--file", &csv_out,
        ])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,date,time,started,scheduled_tx,same_day_srp,note")
    );
    // newest first
    assert!(lines.next().unwrap().starts_with("2,Jupiter,2024-01-02,09:00 AM,0,0,0"));
    assert!(lines.next().unwrap().starts_with("1,Venus,2024-01-01,08:00 AM,1,0,0"));

    let json_out = temp_out("cli_export", "json");
    rtk()
        .args([
            "--config", &conf, "--db", &db, "export", "--format", "json", "--file", &json_out,
            "--name", "Venus",
        ])
        .assert()
        .success();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
    assert_eq!(v[0]["name"], "Venus");
    assert_eq!(v[0]["started"], 1);
}

#[test]
fn export_requires_absolute_path() {
    let (db, conf) = init_env("cli_export_rel");
    seed_scenario(&db, &conf);

    rtk()
        .args(["--config", &conf, "--db", &db, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn import_spreadsheet_csv() {
    let (db, conf) = init_env("cli_import");

    let src = temp_out("cli_import_src", "csv");
    fs::write(
        &src,
        "name,date,time,started,typetx,typesrp,note\n\
         Venus,2024-02-01,8:00 AM,1,0,1,\n\
         Jupiter,2024-02-02,12:30 PM,TRUE,FALSE,FALSE,late start\n",
    )
    .unwrap();

    rtk()
        .args(["--config", &conf, "--db", &db, "import", "--file", &src])
        .assert()
        .success()
        .stdout(contains("Imported 2 entries."));

    rtk()
        .args(["--config", &conf, "--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("12:30 PM"))
        .stdout(contains("late start"));
}

#[test]
fn import_with_bad_row_inserts_nothing() {
    let (db, conf) = init_env("cli_import_bad");

    let src = temp_out("cli_import_bad_src", "csv");
    fs::write(
        &src,
        "name,date,time,started,scheduled_tx,same_day_srp,note\n\
         Venus,2024-02-01,08:00 AM,1,0,1,ok\n\
         Pluto,2024-02-02,09:00 AM,0,0,0,bad\n",
    )
    .unwrap();

    rtk()
        .args(["--config", &conf, "--db", &db, "import", "--file", &src])
        .assert()
        .failure()
        .stderr(contains("line 3"));

    rtk()
        .args(["--config", &conf, "--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("No data yet."));
}

#[test]
fn slots_lists_the_configured_window() {
    let (db, conf) = init_env("cli_slots");

    rtk()
        .args(["--config", &conf, "--db", &db, "slots"])
        .assert()
        .success()
        .stdout(contains("08:00 AM"))
        .stdout(contains("12:30 PM"))
        .stdout(contains("05:00 PM"))
        .stdout(contains("05:30 PM").not());
}

#[test]
fn config_check_and_print() {
    let (db, conf) = init_env("cli_config");

    rtk()
        .args(["--config", &conf, "--db", &db, "config", "--check", "--print"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid."))
        .stdout(contains("Jupiter"));
}

#[test]
fn log_records_operations() {
    let (db, conf) = init_env("cli_log");
    seed_scenario(&db, &conf);

    rtk()
        .args(["--config", &conf, "--db", &db, "del", "2", "--yes"])
        .assert()
        .success();

    rtk()
        .args(["--config", &conf, "--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("del"));
}

#[test]
fn backup_copies_database() {
    let (db, conf) = init_env("cli_backup");
    seed_scenario(&db, &conf);

    let dest = temp_out("cli_backup", "sqlite");
    let zipped = temp_out("cli_backup", "zip");

    rtk()
        .args(["--config", &conf, "--db", &db, "backup", "--file", &dest])
        .assert()
        .success();
    assert!(fs::metadata(&dest).unwrap().len() > 0);

    rtk()
        .args(["--config", &conf, "--db", &db, "backup", "--file", &dest, "--compress", "--force"])
        .assert()
        .success();
    assert!(fs::metadata(&zipped).is_ok());
}

fn read_single_zip_entry(path: &str) -> (String, Vec<u8>) {
    let mut archive = zip::ZipArchive::new(fs::File::open(path).unwrap()).unwrap();
    assert_eq!(archive.len(), 1);
    let mut entry = archive.by_index(0).unwrap();
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).unwrap();
    (entry.name().to_string(), bytes)
}

#[test]
fn compressed_backup_to_zip_destination_keeps_the_archive() {
    let (db, conf) = init_env("cli_backup_zip");
    seed_scenario(&db, &conf);

    let dest = temp_out("cli_backup_zip", "zip");

    rtk()
        .args(["--config", &conf, "--db", &db, "backup", "--file", &dest, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed backup created"));

    let (name, bytes) = read_single_zip_entry(&dest);
    assert!(name.ends_with(".sqlite"), "entry {name}");
    assert_eq!(bytes, fs::read(&db).unwrap());
    assert!(bytes.starts_with(b"SQLite format 3\0"));

    // overwrite the existing archive
    rtk()
        .args(["--config", &conf, "--db", &db, "backup", "--file", &dest, "--compress", "--force"])
        .assert()
        .success();
    let (_, again) = read_single_zip_entry(&dest);
    assert!(!again.is_empty());
}

#[test]
fn db_check_fails_on_a_corrupted_file() {
    let (db, conf) = init_env("cli_db_corrupt");
    seed_scenario(&db, &conf);

    let mut bytes = fs::read(&db).unwrap();
    assert!(bytes.len() > 8192);
    for b in &mut bytes[4096..8192] {
        *b = 0xFF;
    }
    fs::write(&db, bytes).unwrap();

    rtk()
        .args(["--config", &conf, "--db", &db, "db", "--check"])
        .assert()
        .failure();
}

#[test]
fn db_info_and_check() {
    let (db, conf) = init_env("cli_db");
    seed_scenario(&db, &conf);

    rtk()
        .args(["--config", &conf, "--db", &db, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total entries"))
        .stdout(contains("Integrity check passed."));
}
