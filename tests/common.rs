#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use officetracker::api::{AppState, SharedState, create_router};
use officetracker::config::Config;
use officetracker::core::backup::BackupManager;
use officetracker::db::{DbPool, init_db_file};
use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

pub fn ot() -> Command {
    cargo_bin_cmd!("officetracker")
}

/// Fresh, empty working directory for one test inside the system temp dir.
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("officetracker_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Config pointing at `<dir>/office_tracker.db` and `<dir>/backups`.
pub fn test_config(name: &str) -> Config {
    let dir = setup_dir(name);
    Config {
        database: dir.join("office_tracker.db").to_string_lossy().to_string(),
        backup_dir: dir.join("backups").to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// Migrated store plus its backup manager.
pub fn init_store(name: &str) -> (Config, BackupManager) {
    let cfg = test_config(name);
    init_db_file(&cfg.database_path()).expect("init db");
    let manager = BackupManager::from_config(&cfg);
    (cfg, manager)
}

pub fn open(cfg: &Config) -> DbPool {
    DbPool::new(&cfg.database_path()).expect("open db")
}

pub fn test_state(name: &str) -> (Config, SharedState) {
    let cfg = test_config(name);
    let state = AppState::initialize(cfg.clone()).expect("init state");
    (cfg, Arc::new(state))
}

pub fn test_router(name: &str) -> (Config, axum::Router) {
    let (cfg, state) = test_state(name);
    (cfg, create_router(state))
}

/// Number of snapshot files currently in the backup directory.
pub fn backup_count(cfg: &Config) -> usize {
    match fs::read_dir(cfg.backup_path()) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("db"))
            .count(),
        Err(_) => 0,
    }
}

/// Read one part of an `.xlsx` package as text.
pub fn xlsx_part(bytes: &[u8], part: &str) -> String {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("xlsx is a zip");
    let mut file = archive.by_name(part).expect("part present");
    let mut out = String::new();
    file.read_to_string(&mut out).expect("utf-8 part");
    out
}
