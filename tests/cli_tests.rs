mod common;
use common::{ot, setup_dir};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::time::{Duration, SystemTime};

fn init(db: &str, backups: &str) {
    ot().args(["--db", db, "--backup-dir", backups, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
}

#[test]
fn test_init_creates_database_and_backup_dir() {
    let dir = setup_dir("cli_init");
    let db = dir.join("office_tracker.db");
    let backups = dir.join("backups");

    init(db.to_str().unwrap(), backups.to_str().unwrap());

    assert!(db.is_file());
    assert!(backups.is_dir());
}

#[test]
fn test_backups_empty_listing() {
    let dir = setup_dir("cli_backups_empty");
    let db = dir.join("office_tracker.db");
    let backups = dir.join("backups");
    init(db.to_str().unwrap(), backups.to_str().unwrap());

    ot().args([
        "--db",
        db.to_str().unwrap(),
        "--backup-dir",
        backups.to_str().unwrap(),
        "backups",
    ])
    .assert()
    .success()
    .stdout(contains("No backups found"));
}

#[test]
fn test_backups_listing_across_dst_fall_back() {
    let dir = setup_dir("cli_backups_dst");
    let db = dir.join("office_tracker.db");
    let backups = dir.join("backups");
    init(db.to_str().unwrap(), backups.to_str().unwrap());

    // 2024-11-03: 05:45 UTC is 01:45 EDT, 06:15 UTC is 01:15 EST
    let older = backups.join("z_older.db");
    let newer = backups.join("a_newer.db");
    for (path, secs) in [(&older, 1_730_612_700), (&newer, 1_730_614_500)] {
        fs::copy(&db, path).unwrap();
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    let out = ot()
        .env("TZ", "EST5EDT,M3.2.0,M11.1.0")
        .args([
            "--db",
            db.to_str().unwrap(),
            "--backup-dir",
            backups.to_str().unwrap(),
            "backups",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(out).unwrap();

    let newer_at = stdout.find("a_newer.db").unwrap();
    let older_at = stdout.find("z_older.db").unwrap();
    assert!(newer_at < older_at, "newest snapshot must be listed first:\n{stdout}");
}

#[test]
fn test_restore_unknown_file_fails() {
    let dir = setup_dir("cli_restore_unknown");
    let db = dir.join("office_tracker.db");
    let backups = dir.join("backups");
    init(db.to_str().unwrap(), backups.to_str().unwrap());

    ot().args([
        "--db",
        db.to_str().unwrap(),
        "--backup-dir",
        backups.to_str().unwrap(),
        "restore",
        "missing.db",
    ])
    .assert()
    .failure()
    .stderr(contains("Backup file not found"));
}

#[test]
fn test_export_writes_file_and_respects_force() {
    let dir = setup_dir("cli_export");
    let db = dir.join("office_tracker.db");
    let backups = dir.join("backups");
    let out = dir.join("out");
    init(db.to_str().unwrap(), backups.to_str().unwrap());

    let args = [
        "--db",
        db.to_str().unwrap(),
        "--backup-dir",
        backups.to_str().unwrap(),
        "export",
        "2024",
        "1",
        "--dir",
        out.to_str().unwrap(),
    ];

    ot().args(args)
        .assert()
        .success()
        .stdout(contains("XLSX export completed").and(contains("office_tracker_January_2024_exported_")));

    ot().args(args)
        .assert()
        .failure()
        .stderr(contains("already exists"));

    ot().args(args).arg("--force").assert().success();

    let files: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_export_invalid_month_fails() {
    let dir = setup_dir("cli_export_invalid");
    let db = dir.join("office_tracker.db");
    let backups = dir.join("backups");
    init(db.to_str().unwrap(), backups.to_str().unwrap());

    ot().args([
        "--db",
        db.to_str().unwrap(),
        "--backup-dir",
        backups.to_str().unwrap(),
        "export",
        "2024",
        "13",
        "--dir",
        dir.to_str().unwrap(),
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid month"));
}
