use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db_file;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;

/// Handle the `init` command
///
/// Creates:
///  - the configuration file (skipped with `--test`)
///  - the SQLite database with its schema
///  - the backup directory
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.test {
        let path = Config::config_file();
        cfg.save_to(&path)?;
        info(format!("Config file : {}", path.display()));
    }

    init_db_file(&cfg.database_path())?;
    fs::create_dir_all(cfg.backup_path())?;

    info(format!("Backups     : {}", cfg.backup_dir));
    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
