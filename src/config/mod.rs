use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,
    #[serde(default = "default_backup_prefix")]
    pub backup_prefix: String,
    #[serde(default = "default_backup_retention")]
    pub backup_retention: usize,
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_backup_dir() -> String {
    Config::backup_dir().to_string_lossy().to_string()
}
fn default_backup_prefix() -> String {
    "office_tracker_backup".to_string()
}
fn default_backup_retention() -> usize {
    5
}
fn default_export_prefix() -> String {
    "office_tracker".to_string()
}
fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            backup_dir: default_backup_dir(),
            backup_prefix: default_backup_prefix(),
            backup_retention: default_backup_retention(),
            export_prefix: default_export_prefix(),
            bind: default_bind(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.officetracker`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".officetracker")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("officetracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("office_tracker.db")
    }

    /// Return the default snapshot directory
    pub fn backup_dir() -> PathBuf {
        Self::config_dir().join("backups")
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`. Missing keys fall back to their defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.backup_dir = expand_tilde(&cfg.backup_dir).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database)
    }

    pub fn backup_path(&self) -> PathBuf {
        PathBuf::from(&self.backup_dir)
    }
}
