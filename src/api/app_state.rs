//! Shared state handed to every handler.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::core::backup::BackupManager;
use crate::db::init_db_file;
use crate::errors::AppResult;

pub struct AppState {
    pub config: Config,
    pub backups: BackupManager,
    /// Serializes mutations, their snapshot, and restores. Reads do not take it.
    /// Handlers move the owned guard into the blocking task.
    pub write_lock: Arc<Mutex<()>>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Build the state without touching the filesystem.
    pub fn new(config: Config) -> Self {
        let backups = BackupManager::from_config(&config);
        Self {
            config,
            backups,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Migrate the store and create the backup directory, then build the state.
    pub fn initialize(config: Config) -> AppResult<Self> {
        init_db_file(&config.database_path())?;
        std::fs::create_dir_all(config.backup_path())?;
        Ok(Self::new(config))
    }

    pub fn db_path(&self) -> PathBuf {
        self.config.database_path()
    }
}
