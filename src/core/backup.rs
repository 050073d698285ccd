use crate::config::Config;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;
use tracing::{debug, info, warn};

const BACKUP_EXT: &str = "db";

/// One snapshot file as reported by `list_backups`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BackupInfo {
    pub filename: String,
    /// Last-modified time, local, `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
    pub size: u64,
}

/// Snapshots the store file into a directory of timestamped copies and keeps
/// only the most recent `retention` of them.
#[derive(Debug, Clone)]
pub struct BackupManager {
    db_path: PathBuf,
    backup_dir: PathBuf,
    prefix: String,
    retention: usize,
}

impl BackupManager {
    pub fn new(db_path: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            backup_dir: backup_dir.into(),
            prefix: "office_tracker_backup".to_string(),
            retention: 5,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.database_path(), cfg.backup_path())
            .with_prefix(&cfg.backup_prefix)
            .with_retention(cfg.backup_retention)
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn with_retention(mut self, retention: usize) -> Self {
        self.retention = retention.max(1);
        self
    }

    /// Snapshot name for a given instant: `<prefix>_<YYYYMMDD_HHMMSS>.db`.
    pub fn snapshot_name(&self, at: NaiveDateTime) -> String {
        format!(
            "{}_{}.{}",
            self.prefix,
            at.format("%Y%m%d_%H%M%S"),
            BACKUP_EXT
        )
    }

    /// Copy the live store into the backup directory, then prune.
    /// Returns `None` when there is no store file yet.
    pub fn snapshot(&self) -> AppResult<Option<PathBuf>> {
        self.snapshot_at(Local::now().naive_local())
    }

    pub fn snapshot_at(&self, at: NaiveDateTime) -> AppResult<Option<PathBuf>> {
        if !self.db_path.exists() {
            debug!(db = %self.db_path.display(), "no store file, snapshot skipped");
            return Ok(None);
        }

        fs::create_dir_all(&self.backup_dir)?;

        let dest = self.backup_dir.join(self.snapshot_name(at));
        fs::copy(&self.db_path, &dest)?;
        info!(file = %dest.display(), "snapshot created");

        self.prune()?;
        Ok(Some(dest))
    }

    /// Delete the oldest snapshots (by filename) until at most `retention` remain.
    /// Returns the names that were removed.
    pub fn prune(&self) -> AppResult<Vec<String>> {
        let mut names = self.backup_file_names()?;
        names.sort();

        let mut removed = Vec::new();
        while names.len() > self.retention {
            let oldest = names.remove(0);
            fs::remove_file(self.backup_dir.join(&oldest))?;
            debug!(file = %oldest, "old snapshot pruned");
            removed.push(oldest);
        }
        Ok(removed)
    }

    /// Every snapshot with its modification time and size, newest first.
    ///
    /// Ordered on the raw modification time; the formatted local timestamp is
    /// not monotonic across a DST fall-back.
    pub fn list_backups(&self) -> AppResult<Vec<BackupInfo>> {
        let mut entries: Vec<(SystemTime, BackupInfo)> = Vec::new();

        for name in self.backup_file_names()? {
            let meta = fs::metadata(self.backup_dir.join(&name))?;
            let modified = meta.modified()?;
            let local: DateTime<Local> = modified.into();
            entries.push((
                modified,
                BackupInfo {
                    filename: name,
                    timestamp: local.format("%Y-%m-%d %H:%M:%S").to_string(),
                    size: meta.len(),
                },
            ));
        }

        entries.sort_by(|(ta, a), (tb, b)| tb.cmp(ta).then_with(|| b.filename.cmp(&a.filename)));
        Ok(entries.into_iter().map(|(_, info)| info).collect())
    }

    /// Replace the live store with the snapshot `filename`.
    ///
    /// The current store is snapshotted first. No connection to the store may
    /// be open while this runs.
    pub fn restore(&self, filename: &str) -> AppResult<()> {
        let src = self
            .resolve(filename)
            .ok_or_else(|| AppError::NotFound("Backup file not found".to_string()))?;

        // Read before snapshotting: pruning may remove `src` if it is the oldest.
        let bytes = fs::read(&src)?;

        self.snapshot()?;

        let staging = self.db_path.with_extension("restore");
        fs::write(&staging, &bytes)?;
        if let Err(e) = fs::rename(&staging, &self.db_path) {
            warn!(error = %e, "rename failed, copying restored store in place");
            fs::copy(&staging, &self.db_path)?;
            fs::remove_file(&staging).ok();
        }

        info!(file = %filename, "store restored from snapshot");
        Ok(())
    }

    /// Path of an existing snapshot inside the backup directory.
    fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let plain = !filename.is_empty()
            && !filename.contains('/')
            && !filename.contains('\\')
            && filename != "."
            && filename != "..";
        if !plain {
            return None;
        }

        let path = self.backup_dir.join(filename);
        path.is_file().then_some(path)
    }

    fn backup_file_names(&self) -> AppResult<Vec<String>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.backup_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(BACKUP_EXT) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}
